//! HTTP handlers for the device command surface.

pub mod calibrate;
pub mod command;
