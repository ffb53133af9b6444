//! Routes for listing, inspecting and clearing sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use numdraw_draw::application::command_handlers;
use numdraw_draw::application::query_handlers::{self, SessionSummaryView, SessionView};
use numdraw_draw::domain::commands::ClearSession;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::owner::Owner;
use crate::state::AppState;

/// Response body for GET /api/sessions.
#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    /// The caller's sessions, newest first.
    pub sessions: Vec<SessionSummaryView>,
}

/// GET /api/sessions
#[instrument(skip_all, fields(owner = ?owner.0))]
async fn list_sessions(
    State(state): State<AppState>,
    owner: Owner,
) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = query_handlers::list_sessions(owner.0.as_deref(), &state.sessions)?;
    Ok(Json(SessionListResponse { sessions }))
}

/// GET /api/sessions/{id}
#[instrument(skip_all, fields(owner = ?owner.0, session_id = %session_id))]
async fn get_session(
    State(state): State<AppState>,
    owner: Owner,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let view = query_handlers::get_session_by_id(
        &session_id,
        owner.0.as_deref(),
        &state.policy,
        &state.sessions,
    )?;
    Ok(Json(view))
}

/// DELETE /api/sessions/{id}
#[instrument(skip_all, fields(owner = ?owner.0, session_id = %session_id))]
async fn clear_session(
    State(state): State<AppState>,
    owner: Owner,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = ClearSession {
        session_id,
        owner: owner.0,
    };

    info!("handling clear_session command");

    command_handlers::handle_clear_session(&command, &state.policy, &state.sessions)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for session endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions))
        .route("/{id}", get(get_session).delete(clear_session))
}
