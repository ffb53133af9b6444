//! Routes for drawing numbers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use numdraw_core::record::SortOrder;
use numdraw_draw::application::command_handlers;
use numdraw_draw::domain::commands::{DrawNumbers, SessionRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::owner::Owner;
use crate::state::AppState;

/// Request body for POST /api/random.
///
/// `min`, `max` and `count` are taken as raw JSON so malformed values reach
/// the validator and come back as a 400 naming the field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    /// Inclusive lower bound.
    #[serde(default)]
    pub min: Value,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max: Value,
    /// How many values to draw.
    #[serde(default)]
    pub count: Value,
    /// `asc`, `desc` or `none`.
    pub sort: Option<String>,
    /// Exclude repeats and session history; defaults to `true`.
    pub no_duplicates: Option<bool>,
    /// Forward the draw to the record store; defaults to `false`.
    pub persist: Option<bool>,
    /// Existing session to draw in.
    pub session_id: Option<String>,
    /// Session name to reuse or create.
    pub session_name: Option<String>,
}

/// Response body for a successful draw.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResponse {
    /// The drawn values.
    pub numbers: Vec<i64>,
    /// The session the draw was recorded in.
    pub session_id: Uuid,
    /// Record identifier when the draw was persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted_id: Option<String>,
    /// Soft failure reported alongside the draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/random
#[instrument(skip_all, fields(owner = ?owner.0))]
async fn draw_numbers(
    State(state): State<AppState>,
    owner: Owner,
    payload: Result<Json<DrawRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DrawResponse>), ApiError> {
    let Json(request) = payload?;

    let sort = request
        .sort
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()?
        .unwrap_or_default();

    let command = DrawNumbers {
        min: request.min,
        max: request.max,
        count: request.count,
        sort,
        no_duplicates: request.no_duplicates.unwrap_or(true),
        persist: request.persist.unwrap_or(false),
        session: SessionRef::from_parts(request.session_id, request.session_name),
        owner: owner.0,
    };

    info!(session = ?command.session, "handling draw_numbers command");

    let outcome = command_handlers::handle_draw_numbers(
        &command,
        &state.policy,
        state.clock.as_ref(),
        &state.rng,
        &state.sessions,
        &*state.record_gateway,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DrawResponse {
            numbers: outcome.numbers,
            session_id: outcome.session_id,
            persisted_id: outcome.persisted_id,
            warning: outcome.warning,
        }),
    ))
}

/// Returns the router for drawing numbers.
pub fn router() -> Router<AppState> {
    Router::new().route("/random", post(draw_numbers))
}
