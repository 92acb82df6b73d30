//! Shared application state for axum handlers.

use std::sync::Arc;

use shutterhub_app::ports::Transmitter;
use shutterhub_app::services::ControllerService;

/// Application state shared across all axum handlers.
///
/// Generic over the transmitter type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the transmitter itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<T> {
    /// Controller service driving the shutters.
    pub controller: Arc<ControllerService<T>>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<T> AppState<T>
where
    T: Transmitter + Send + Sync + 'static,
{
    /// Create a new application state owning the controller.
    pub fn new(controller: ControllerService<T>) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` controller.
    ///
    /// Use this when the controller is shared with the worker tasks before
    /// constructing the HTTP state.
    pub fn from_arc(controller: Arc<ControllerService<T>>) -> Self {
        Self { controller }
    }
}
