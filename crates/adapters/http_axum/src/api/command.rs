//! `GET /get` — the command endpoint behind the panel's links and form.
//!
//! Two query shapes are understood:
//! - `command=<digit>,<direction>` from the manual-control links;
//! - `shutter_scale=<scale>[,<token>]*` from the panel script, where the
//!   scale value carries comma-suffixed device tokens. Device tokens may
//!   also arrive as separate parameters when the browser serializes the
//!   form natively, so every parameter name apart from `shutter_scale`
//!   is tried as a token as well.
//!
//! Bad input is logged and dropped; the endpoint always answers with the
//! panel page, exactly like the device it replaces.

use axum::extract::{Query, State};
use axum::response::Html;

use shutterhub_app::ports::Transmitter;

use crate::panel;
use crate::state::AppState;

const COMMAND_PARAM: &str = "command";
const SHUTTER_SCALE_PARAM: &str = "shutter_scale";

/// `GET /get`
pub async fn submit<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<&'static str>
where
    T: Transmitter + Send + Sync + 'static,
{
    if let Some((_, input)) = params.iter().find(|(name, _)| name == COMMAND_PARAM) {
        if let Err(err) = state.controller.submit_relative(input) {
            tracing::warn!(input = %input, error = %err, "dropping manual command");
        }
    } else if let Some((_, value)) = params.iter().find(|(name, _)| name == SHUTTER_SCALE_PARAM) {
        let mut pieces = value.split(',');
        let scale = pieces.next().unwrap_or_default();
        let extra_params = params
            .iter()
            .filter(|(name, _)| name != SHUTTER_SCALE_PARAM)
            .map(|(name, _)| name.as_str());
        for token in pieces.chain(extra_params) {
            if token.is_empty() {
                continue;
            }
            if let Err(err) = state.controller.submit_absolute(token, scale) {
                tracing::warn!(token = %token, error = %err, "dropping absolute command");
            }
        }
    }

    panel::page()
}
