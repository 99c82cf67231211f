//! HTTP route layer: translates query parameters into engine calls and
//! serializes results back into the `HH:MM` / `YYYY-MM-DD` wire forms.
//!
//! Unknown dates are successful-but-empty responses; malformed parameters
//! are 400s; an upstream refresh failure is a 502 and leaves the previous
//! snapshot serving.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use slot_engine::{self as engine, format_time, parse_date, parse_time, EngineError, Interval};

use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/busy_slots", get(busy_slots))
        .route("/free_slots", get(free_slots))
        .route("/is_available", get(is_available))
        .route("/find_slot", get(find_slot))
        .route("/update", post(update))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Error mapping ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Handler-level errors with their HTTP status class.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed query parameters.
    BadRequest(String),
    /// A well-formed request with nothing to return.
    NotFound(String),
    /// The upstream schedule source failed during a refresh.
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

// ── Handlers ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DateQuery {
    date: String,
}

#[derive(Deserialize)]
struct AvailabilityQuery {
    date: String,
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct FindSlotQuery {
    duration_minutes: i64,
}

#[derive(Serialize)]
struct AvailabilityResponse {
    available: bool,
}

#[derive(Serialize)]
struct PlacementResponse {
    date: String,
    start: String,
    end: String,
}

#[derive(Serialize)]
struct UpdateResponse {
    status: &'static str,
}

fn to_pairs(slots: &[Interval]) -> Vec<(String, String)> {
    slots
        .iter()
        .map(|slot| (format_time(slot.start()), format_time(slot.end())))
        .collect()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /busy_slots?date=YYYY-MM-DD
async fn busy_slots(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<(String, String)>>, ApiError> {
    let date = parse_date(&query.date)?;
    let snapshot = state.store.snapshot();
    Ok(Json(to_pairs(&engine::busy_slots(&snapshot, date))))
}

/// GET /free_slots?date=YYYY-MM-DD
async fn free_slots(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<(String, String)>>, ApiError> {
    let date = parse_date(&query.date)?;
    let snapshot = state.store.snapshot();
    Ok(Json(to_pairs(&engine::free_slots(&snapshot, date))))
}

/// GET /is_available?date=YYYY-MM-DD&start=HH:MM&end=HH:MM
async fn is_available(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let date = parse_date(&query.date)?;
    let start = parse_time(&query.start)?;
    let end = parse_time(&query.end)?;
    let snapshot = state.store.snapshot();
    Ok(Json(AvailabilityResponse {
        available: engine::is_available(&snapshot, date, start, end),
    }))
}

/// GET /find_slot?duration_minutes=N
async fn find_slot(
    State(state): State<AppState>,
    Query(query): Query<FindSlotQuery>,
) -> Result<Json<PlacementResponse>, ApiError> {
    let snapshot = state.store.snapshot();
    match engine::find_slot(&snapshot, query.duration_minutes)? {
        Some(placement) => Ok(Json(PlacementResponse {
            date: placement.date.to_string(),
            start: format_time(placement.start),
            end: format_time(placement.end),
        })),
        None => Err(ApiError::NotFound(format!(
            "no free slot of {} minutes on any known date",
            query.duration_minutes
        ))),
    }
}

/// POST /update — re-fetch the upstream schedule and atomically replace the
/// snapshot. On failure the previous snapshot stays live.
async fn update(State(state): State<AppState>) -> Result<Json<UpdateResponse>, ApiError> {
    match state.loader.fetch().await {
        Ok((days, busy)) => {
            let (day_count, busy_count) = (days.len(), busy.len());
            state.store.replace(days, busy);
            tracing::info!(days = day_count, busy = busy_count, "schedule replaced");
            Ok(Json(UpdateResponse { status: "updated" }))
        }
        Err(err) => {
            tracing::warn!(error = %err, "refresh failed, keeping previous schedule");
            Err(ApiError::Upstream(err.to_string()))
        }
    }
}
