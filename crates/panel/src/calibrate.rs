//! Calibration trigger — one JSON POST per button press.
//!
//! Each call issues a single `POST /api/calibrate` with body
//! `{"please": "<shutter_num>"}`. When the response parses as JSON the
//! shutter's indicator element (`cal_<shutter_num>`) is darkened; any
//! failure is logged and otherwise ignored. There is no retry, no
//! timeout, and no deduplication — rapid repeated presses race freely,
//! each updating only its own indicator.

use serde::Serialize;

/// Background color an indicator takes once calibration is acknowledged.
pub const CALIBRATING_COLOR: &str = "#000000";

/// Updates the visual state of indicator elements, keyed by element id.
///
/// The browser's document is one implementation; tests use plain structs.
pub trait StatusIndicator {
    /// Set the background color of the element with the given id.
    fn set_background(&self, element_id: &str, color: &str);
}

#[derive(Serialize)]
struct CalibrateRequest<'a> {
    please: &'a str,
}

/// Client for the calibration endpoint.
pub struct CalibrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl CalibrationClient {
    /// Create a client against the panel's backend, e.g.
    /// `http://192.168.0.40`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the backend to calibrate one shutter and reflect the outcome
    /// on `indicator`.
    ///
    /// Never fails from the caller's perspective: transport errors and
    /// non-JSON responses are logged and swallowed, and the indicator is
    /// only touched on success.
    pub async fn calibrate(&self, shutter_num: &str, indicator: &impl StatusIndicator) {
        let url = format!("{}/api/calibrate", self.base_url);
        let outcome = async {
            self.http
                .post(&url)
                .json(&CalibrateRequest {
                    please: shutter_num,
                })
                .send()
                .await?
                .json::<serde_json::Value>()
                .await
        }
        .await;

        match outcome {
            Ok(payload) => {
                tracing::debug!(shutter = %shutter_num, %payload, "calibration acknowledged");
                indicator.set_background(&format!("cal_{shutter_num}"), CALIBRATING_COLOR);
            }
            Err(err) => {
                tracing::warn!(shutter = %shutter_num, error = %err, "calibration request failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::http::HeaderMap;
    use axum::response::IntoResponse;
    use axum::routing::post;

    /// Indicator recording every mutation.
    #[derive(Default)]
    struct RecordingIndicator {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingIndicator {
        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl StatusIndicator for RecordingIndicator {
        fn set_background(&self, element_id: &str, color: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((element_id.to_string(), color.to_string()));
        }
    }

    /// One request as the test server saw it.
    #[derive(Clone)]
    struct SeenRequest {
        content_type: Option<String>,
        body: String,
    }

    type Seen = Arc<Mutex<Vec<SeenRequest>>>;

    async fn record(State(seen): State<Seen>, headers: HeaderMap, body: String) -> impl IntoResponse {
        seen.lock().unwrap().push(SeenRequest {
            content_type: headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
            body,
        });
        axum::Json(serde_json::json!({ "calibrating": "ok" }))
    }

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn should_post_json_body_and_update_indicator_on_success() {
        let seen: Seen = Seen::default();
        let app = Router::new()
            .route("/api/calibrate", post(record))
            .with_state(Arc::clone(&seen));
        let base_url = spawn_server(app).await;

        let client = CalibrationClient::new(base_url);
        let indicator = RecordingIndicator::default();
        client.calibrate("3", &indicator).await;

        let requests = seen.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].content_type.as_deref(),
            Some("application/json")
        );
        assert_eq!(requests[0].body, r#"{"please":"3"}"#);
        assert_eq!(
            indicator.calls(),
            vec![("cal_3".to_string(), "#000000".to_string())]
        );
    }

    async fn plain_text() -> &'static str {
        "not json"
    }

    #[tokio::test]
    async fn should_leave_indicator_alone_on_non_json_response() {
        let app = Router::new().route("/api/calibrate", post(plain_text));
        let base_url = spawn_server(app).await;

        let client = CalibrationClient::new(base_url);
        let indicator = RecordingIndicator::default();
        client.calibrate("3", &indicator).await;

        assert!(indicator.calls().is_empty());
    }

    #[tokio::test]
    async fn should_swallow_connection_failure() {
        // nothing listens on port 1
        let client = CalibrationClient::new("http://127.0.0.1:1");
        let indicator = RecordingIndicator::default();
        client.calibrate("0", &indicator).await;

        assert!(indicator.calls().is_empty());
    }

    #[tokio::test]
    async fn should_update_only_matching_indicator_for_concurrent_calls() {
        let seen: Seen = Seen::default();
        let app = Router::new()
            .route("/api/calibrate", post(record))
            .with_state(Arc::clone(&seen));
        let base_url = spawn_server(app).await;

        let client = CalibrationClient::new(base_url);
        let first = RecordingIndicator::default();
        let second = RecordingIndicator::default();
        tokio::join!(
            client.calibrate("0", &first),
            client.calibrate("2", &second)
        );

        assert_eq!(
            first.calls(),
            vec![("cal_0".to_string(), "#000000".to_string())]
        );
        assert_eq!(
            second.calls(),
            vec![("cal_2".to_string(), "#000000".to_string())]
        );
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
