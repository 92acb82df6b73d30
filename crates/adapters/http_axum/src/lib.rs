//! # shutterhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the embedded **control panel** page at `/` (and after every
//!   command, the way the original device firmware answered)
//! - Map `GET /get` query parameters into controller submissions:
//!   `command=<digit>,<direction>` for manual moves,
//!   `shutter_scale=<scale>[,<token>]*` (plus token-named parameters) for
//!   absolute moves
//! - Handle `POST /api/calibrate` with a JSON body naming one shutter
//! - Map application results into HTTP responses (HTML or JSON)
//!
//! ## Dependency rule
//! Depends on `shutterhub-app` (for the port traits and the controller
//! service) and `shutterhub-domain` (for domain types used in
//! request/response mapping). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod panel;
pub mod router;
pub mod state;
