//! `POST /api/calibrate` — queue a calibration run for one shutter.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use shutterhub_app::ports::Transmitter;
use shutterhub_domain::error::DecodeError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body. The panel sends the shutter digit as a string, but a
/// bare number is accepted too.
#[derive(Deserialize)]
pub struct CalibrateRequest {
    pub please: serde_json::Value,
}

/// Acknowledgment body.
#[derive(Serialize)]
pub struct CalibrateResponse {
    /// Token of the shutter whose calibration run was queued.
    pub calibrating: &'static str,
}

/// `POST /api/calibrate`
pub async fn calibrate<T>(
    State(state): State<AppState<T>>,
    Json(request): Json<CalibrateRequest>,
) -> Result<Json<CalibrateResponse>, ApiError>
where
    T: Transmitter + Send + Sync + 'static,
{
    let digit = match &request.please {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        other => return Err(DecodeError::UnknownShutter(other.to_string()).into()),
    };
    let shutter = state.controller.submit_calibrate(&digit)?;
    tracing::info!(shutter = %shutter, "calibration requested");
    Ok(Json(CalibrateResponse {
        calibrating: shutter.token(),
    }))
}
