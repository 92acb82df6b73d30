//! # shutterhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port traits** that adapters must implement (driven/outbound
//!   ports): [`Transmitter`](ports::Transmitter) for the RF link
//! - Provide the **controller service**: one FIFO command queue per shutter,
//!   each drained by its own worker task, with the timed-travel model that
//!   turns absolute positions into motor run times
//! - Orchestrate domain objects without knowing *how* transmission works
//!
//! ## Dependency rule
//! Depends on `shutterhub-domain` only (plus `tokio::sync`/`tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
