//! Application services — the use-case layer.

pub mod controller_service;

pub use controller_service::ControllerService;
