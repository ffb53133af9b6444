//! Numdraw API server entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use numdraw_api::config::AppConfig;
use numdraw_api::state::AppState;
use numdraw_core::clock::{Clock, SystemClock};
use numdraw_core::rng::{DeterministicRng, StdRandom};
use numdraw_draw::domain::session::SessionStore;
use numdraw_record_store::memory::InMemoryDrawRecordStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting numdraw API server");

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.rng_seed {
        Some(seed) => {
            tracing::warn!(seed, "using a fixed RNG seed");
            Arc::new(Mutex::new(StdRandom::seeded(seed)))
        }
        None => Arc::new(Mutex::new(StdRandom::from_os_rng())),
    };
    let app_state = AppState::new(
        clock,
        rng,
        Arc::new(SessionStore::new()),
        Arc::new(InMemoryDrawRecordStore::new()),
        config.policy(),
    );

    // TODO: Replace CorsLayer::permissive() with the frontend origin once it is configurable.
    let app = numdraw_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
