//! Numdraw API: HTTP surface for the draw engine.

pub mod config;
pub mod error;
pub mod owner;
pub mod routes;
pub mod state;

use axum::Router;

/// Builds the application router with every route mounted.
pub fn build_router(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::time::router())
        .nest("/api", routes::random::router())
        .nest("/api/sessions", routes::sessions::router())
        .with_state(app_state)
}
