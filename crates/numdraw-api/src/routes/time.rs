//! Greeting and server time endpoints.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::state::AppState;

/// Response body for GET /api/time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    /// Current server time, ISO-8601 with millisecond precision.
    pub now_iso: String,
}

/// GET /
async fn greeting() -> &'static str {
    "Hello World!"
}

/// GET /api/time
async fn server_time(State(state): State<AppState>) -> Json<TimeResponse> {
    Json(TimeResponse {
        now_iso: state.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Returns the router for the greeting and time endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting))
        .route("/api/time", get(server_time))
}
