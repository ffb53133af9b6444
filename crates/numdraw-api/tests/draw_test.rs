//! Integration tests for POST /api/random.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use numdraw_test_support::MockRng;

fn numbers_of(json: &serde_json::Value) -> Vec<i64> {
    json["numbers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_basic_draw_returns_count_distinct_values() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 10, "count": 3, "noDuplicates": true }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let numbers = numbers_of(&json);
    assert_eq!(numbers.len(), 3);
    assert_eq!(numbers.iter().collect::<HashSet<_>>().len(), 3);
    assert!(numbers.iter().all(|n| (1..=10).contains(n)));
    assert!(json["sessionId"].is_string());
}

#[tokio::test]
async fn test_sorted_draws_are_monotone() {
    let state = common::test_state();

    let (_, asc) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 50, "count": 8, "sort": "asc" }),
        None,
    )
    .await;
    let asc = numbers_of(&asc);
    assert!(asc.windows(2).all(|w| w[0] <= w[1]));

    let (_, desc) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 50, "count": 8, "sort": "desc" }),
        None,
    )
    .await;
    let desc = numbers_of(&desc);
    assert!(desc.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_exhausting_a_range_then_asking_for_more_fails() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 5, "count": 5, "noDuplicates": true }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let drawn: HashSet<i64> = numbers_of(&json).into_iter().collect();
    assert_eq!(drawn, HashSet::from([1, 2, 3, 4, 5]));

    let session_id = json["sessionId"].as_str().unwrap().to_owned();
    let (status, json) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({
            "min": 1, "max": 5, "count": 1, "noDuplicates": true, "sessionId": session_id
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "capacity_error");
    assert_eq!(json["shortfall"], 1);
}

#[tokio::test]
async fn test_allowing_duplicates_on_single_value_range() {
    let state = common::test_state_with_rng(MockRng);

    let (status, json) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 1, "count": 100, "noDuplicates": false }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(numbers_of(&json), vec![1; 100]);
}

#[tokio::test]
async fn test_persisted_draw_returns_record_id() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        common::app(&state),
        "/api/random",
        &serde_json::json!({ "min": 1, "max": 10, "count": 2, "persist": true }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!json["persistedId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_requests_return_400() {
    let state = common::test_state();
    let cases = [
        serde_json::json!({ "min": "invalid", "max": 10, "count": 2 }),
        serde_json::json!({ "min": 10, "max": 5, "count": 2 }),
        serde_json::json!({ "min": 1, "max": 10, "count": 0 }),
        serde_json::json!({ "min": 1, "max": 10, "count": 2.5 }),
        serde_json::json!({ "min": 1, "max": 5, "count": 10, "noDuplicates": true }),
        serde_json::json!({ "min": 1, "max": 10, "count": 2, "sessionId": "does-not-exist" }),
    ];

    for body in &cases {
        let (status, json) =
            common::post_json(common::app(&state), "/api/random", body, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(json["message"].is_string(), "body: {body}");
    }

    // None of the failed requests may leave a session behind.
    let (_, json) = common::get_json(common::app(&state), "/api/sessions", None).await;
    assert!(json["sessions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_greeting_and_time() {
    let state = common::test_state();

    let (status, body) = common::get_json(common::app(&state), "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello World!");

    let (status, json) = common::get_json(common::app(&state), "/api/time", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nowIso"], "2026-01-15T10:00:00.000Z");

    let (status, json) = common::get_json(common::app(&state), "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
