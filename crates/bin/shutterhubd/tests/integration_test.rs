//! End-to-end smoke tests for the full shutterhubd stack.
//!
//! Each test spins up the complete application (virtual transmitter, real
//! controller with worker tasks, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound. Tests that
//! wait for motor travel use a paused clock so they complete instantly.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use shutterhub_adapter_http_axum::router;
use shutterhub_adapter_http_axum::state::AppState;
use shutterhub_adapter_virtual::VirtualTransmitter;
use shutterhub_app::services::ControllerService;
use shutterhub_domain::instruction::Instruction;
use shutterhub_domain::position::Position;
use shutterhub_domain::rf::Frame;
use shutterhub_domain::shutter::ShutterId;
use tower::ServiceExt;

/// Build a fully-wired router backed by a virtual transmitter, with worker
/// tasks already running.
fn app() -> (
    Arc<VirtualTransmitter>,
    Arc<ControllerService<Arc<VirtualTransmitter>>>,
    axum::Router,
) {
    let transmitter = Arc::new(VirtualTransmitter::new());
    let controller = Arc::new(ControllerService::new(Arc::clone(&transmitter)));
    controller.spawn_workers();
    let router = router::build(AppState::from_arc(Arc::clone(&controller)));
    (transmitter, controller, router)
}

/// Poll until the transmitter has sent at least `count` frames. Under a
/// paused clock the sleeps auto-advance time, so waiting out a full motor
/// travel takes no wall time.
async fn wait_for_frames(transmitter: &VirtualTransmitter, count: usize) {
    tokio::time::timeout(Duration::from_secs(120), async {
        while transmitter.sent().len() < count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("expected frames were never transmitted");
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check and panel page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (_, _, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn should_serve_control_panel_at_root() {
    let (_, _, router) = app();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("shutter control"));
    assert!(body.contains("cal_0"));
    assert!(body.contains("living_room_door"));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let (_, _, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/does/not/exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Manual commands
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn should_transmit_up_frame_for_manual_command() {
    let (transmitter, _, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/get?command=3,up")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    wait_for_frames(&transmitter, 1).await;
    assert_eq!(
        transmitter.sent(),
        vec![Frame::encode(ShutterId::LivingRoomDoor, Instruction::Up)]
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn should_transmit_nothing_for_malformed_manual_command() {
    let (transmitter, _, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/get?command=garage,sideways")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(transmitter.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Absolute positioning
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn should_calibrate_then_move_for_absolute_command() {
    let (transmitter, controller, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/get?shutter_scale=50,living_room_door")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // Calibration drives up (no stop frame), then the timed move drives down
    // and stops.
    wait_for_frames(&transmitter, 3).await;
    assert_eq!(
        transmitter.sent(),
        vec![
            Frame::encode(ShutterId::LivingRoomDoor, Instruction::Up),
            Frame::encode(ShutterId::LivingRoomDoor, Instruction::Down),
            Frame::encode(ShutterId::LivingRoomDoor, Instruction::Stop),
        ]
    );
    assert_eq!(
        controller.position(ShutterId::LivingRoomDoor),
        Some(Position::new(50))
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn should_drive_each_selected_shutter_independently() {
    let (transmitter, controller, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/get?shutter_scale=100,bedroom_window,bedroom_door")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // Per shutter: calibrate up, drive down, stop.
    wait_for_frames(&transmitter, 6).await;

    let bedroom_window: Vec<Frame> = transmitter
        .sent()
        .into_iter()
        .filter(|frame| frame.select() == ShutterId::BedroomWindow.select_id())
        .collect();
    assert_eq!(
        bedroom_window,
        vec![
            Frame::encode(ShutterId::BedroomWindow, Instruction::Up),
            Frame::encode(ShutterId::BedroomWindow, Instruction::Down),
            Frame::encode(ShutterId::BedroomWindow, Instruction::Stop),
        ]
    );
    assert_eq!(
        controller.position(ShutterId::BedroomWindow),
        Some(Position::BOTTOM)
    );
    assert_eq!(
        controller.position(ShutterId::BedroomDoor),
        Some(Position::BOTTOM)
    );
    assert_eq!(controller.position(ShutterId::LivingRoomDoor), None);
}

// ---------------------------------------------------------------------------
// Calibration endpoint
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn should_calibrate_shutter_on_api_request() {
    let (transmitter, controller, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calibrate")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"please":"3"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "calibrating": "living_room_door" }));

    // Calibration drives to the top end stop without a trailing stop frame.
    wait_for_frames(&transmitter, 1).await;
    assert_eq!(
        transmitter.sent(),
        vec![Frame::encode(ShutterId::LivingRoomDoor, Instruction::Up)]
    );

    // Wait out the travel time for the position to settle.
    tokio::time::sleep(ShutterId::LivingRoomDoor.travel().up + Duration::from_secs(1)).await;
    assert_eq!(
        controller.position(ShutterId::LivingRoomDoor),
        Some(Position::TOP)
    );
}

#[tokio::test]
async fn should_reject_calibration_of_unknown_shutter() {
    let (transmitter, _, router) = app();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calibrate")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"please":"7"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(transmitter.sent().is_empty());
}
