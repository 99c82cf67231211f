//! End-to-end refresh flow against a local mock upstream.
//!
//! A throwaway axum server plays the upstream schedule source; its response
//! (status and body) can be swapped between requests to drive the
//! success → replace → failure sequence.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use slot_engine::ScheduleStore;
use slot_server::loader::ScheduleLoader;
use slot_server::routes::router;
use slot_server::state::AppState;
use tower::ServiceExt;

type UpstreamResponse = Arc<Mutex<(StatusCode, Value)>>;

/// Serve the shared (status, body) pair on an ephemeral port; returns the
/// URL the loader should fetch.
async fn spawn_upstream(response: UpstreamResponse) -> String {
    let app = Router::new().route(
        "/schedule",
        get(move || {
            let response = response.clone();
            async move {
                let (status, body) = response.lock().unwrap().clone();
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/schedule", addr)
}

fn sample_document() -> Value {
    json!({
        "days": [
            {"id": 1, "date": "2025-02-15", "start": "09:00", "end": "21:00"},
        ],
        "timeslots": [
            {"id": 1, "day_id": 1, "start": "09:00", "end": "12:00"},
            {"id": 2, "day_id": 1, "start": "17:30", "end": "20:00"},
            {"id": 3, "day_id": 99, "start": "10:00", "end": "11:00"},
        ],
    })
}

async fn request(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn update_populates_an_empty_store_and_drops_orphan_timeslots() {
    let upstream: UpstreamResponse = Arc::new(Mutex::new((StatusCode::OK, sample_document())));
    let url = spawn_upstream(upstream).await;

    let store = Arc::new(ScheduleStore::new());
    let loader = ScheduleLoader::new(reqwest::Client::new(), url);
    let app = router(AppState::new(store, loader));

    let (status, body) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    // The orphan day_id=99 slot is gone; the two real ones serve.
    let (status, body) = request(&app, "GET", "/busy_slots?date=2025-02-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([["09:00", "12:00"], ["17:30", "20:00"]]));

    let (_, body) = request(&app, "GET", "/free_slots?date=2025-02-15").await;
    assert_eq!(body, json!([["12:00", "17:30"], ["20:00", "21:00"]]));
}

#[tokio::test]
async fn update_replaces_the_schedule_wholesale() {
    let upstream: UpstreamResponse = Arc::new(Mutex::new((StatusCode::OK, sample_document())));
    let url = spawn_upstream(upstream.clone()).await;

    let store = Arc::new(ScheduleStore::new());
    let loader = ScheduleLoader::new(reqwest::Client::new(), url);
    let app = router(AppState::new(store, loader));

    let (status, _) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::OK);

    // The upstream moves to a different day entirely.
    *upstream.lock().unwrap() = (
        StatusCode::OK,
        json!({
            "days": [{"id": 7, "date": "2025-03-01", "start": "08:00", "end": "16:00"}],
            "timeslots": [],
        }),
    );

    let (status, _) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::OK);

    // Full swap: the old date is gone, the new one answers.
    let (_, body) = request(&app, "GET", "/busy_slots?date=2025-02-15").await;
    assert_eq!(body, json!([]));
    let (_, body) = request(&app, "GET", "/free_slots?date=2025-03-01").await;
    assert_eq!(body, json!([["08:00", "16:00"]]));
}

#[tokio::test]
async fn upstream_error_leaves_the_previous_schedule_live() {
    let upstream: UpstreamResponse = Arc::new(Mutex::new((StatusCode::OK, sample_document())));
    let url = spawn_upstream(upstream.clone()).await;

    let store = Arc::new(ScheduleStore::new());
    let loader = ScheduleLoader::new(reqwest::Client::new(), url);
    let app = router(AppState::new(store, loader));

    let (status, _) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::OK);

    *upstream.lock().unwrap() = (StatusCode::INTERNAL_SERVER_ERROR, json!({}));

    let (status, _) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = request(&app, "GET", "/free_slots?date=2025-02-15").await;
    assert_eq!(body, json!([["12:00", "17:30"], ["20:00", "21:00"]]));
}

#[tokio::test]
async fn invalid_schedule_content_is_an_upstream_failure() {
    // Backwards working hours: decodes structurally but fails validation.
    let upstream: UpstreamResponse = Arc::new(Mutex::new((
        StatusCode::OK,
        json!({
            "days": [{"id": 1, "date": "2025-02-15", "start": "21:00", "end": "09:00"}],
            "timeslots": [],
        }),
    )));
    let url = spawn_upstream(upstream).await;

    let store = Arc::new(ScheduleStore::new());
    let loader = ScheduleLoader::new(reqwest::Client::new(), url);
    let app = router(AppState::new(store, loader));

    let (status, body) = request(&app, "POST", "/update").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("invalid schedule"));
}
