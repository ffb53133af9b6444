//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use numdraw_core::clock::Clock;
use numdraw_core::record::DrawRecordGateway;
use numdraw_core::rng::{DeterministicRng, StdRandom};
use numdraw_draw::domain::policy::DrawPolicy;
use numdraw_draw::domain::session::SessionStore;
use numdraw_record_store::memory::InMemoryDrawRecordStore;
use numdraw_test_support::FixedClock;
use tower::ServiceExt;

use numdraw_api::owner::OWNER_HEADER;
use numdraw_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Shared state for a test run. Clone it into every `app()` call so
/// sessions persist across requests.
pub fn test_state() -> AppState {
    test_state_with_rng(StdRandom::seeded(2026))
}

/// Like `test_state`, with a caller-supplied RNG.
pub fn test_state_with_rng(rng: impl DeterministicRng + Send + 'static) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let record_gateway: Arc<dyn DrawRecordGateway> = Arc::new(InMemoryDrawRecordStore::new());
    AppState::new(
        fixed_clock(),
        rng,
        Arc::new(SessionStore::new()),
        record_gateway,
        DrawPolicy::default(),
    )
}

/// Build the full app router over `state`, the same way `main.rs` does.
pub fn app(state: &AppState) -> Router {
    numdraw_api::build_router(state.clone())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body_bytes).into()));

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    owner: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(owner) = owner {
        builder = builder.header(OWNER_HEADER, owner);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response. Non-JSON bodies come back
/// as a JSON string.
pub async fn get_json(app: Router, uri: &str, owner: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(owner) = owner {
        builder = builder.header(OWNER_HEADER, owner);
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}
