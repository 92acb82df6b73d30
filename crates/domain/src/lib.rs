//! # shutterhub-domain
//!
//! Pure domain model for the shutterhub roller-shutter control system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Shutters** (the four radio-controlled devices and their
//!   travel-time parameters)
//! - Define **Instructions** (up / down / stop) and **Positions**
//!   (0 = fully open at the top, 100 = fully closed at the bottom)
//! - Define **Commands** (relative, absolute, calibrate) and their decode
//!   from the wire formats accepted by the HTTP surface
//! - Define the **RF frame** codec and pulse timings for the 433 MHz link
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod id;
pub mod instruction;
pub mod position;
pub mod rf;
pub mod shutter;
