//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use shutterhub_app::ports::Transmitter;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the control panel at `/`, the command endpoint at `/get`, and
/// the calibration endpoint at `/api/calibrate`. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<T>(state: AppState<T>) -> Router
where
    T: Transmitter + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::panel::index))
        .route("/get", get(crate::api::command::submit))
        .route("/api/calibrate", post(crate::api::calibrate::calibrate))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
