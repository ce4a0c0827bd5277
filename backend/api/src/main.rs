//! QF simulation backend — entry point.
//!
//! Hosts in-memory quadratic-funding simulation sessions and exposes a
//! small Axum REST API that UI surfaces call to create sessions, edit
//! contributions, resize the matching pool, and load scenarios. Nothing is
//! persisted; sessions live and die with the process.

mod api;
mod catalog;
mod config;
mod errors;
mod sessions;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use sessions::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    // Load config from environment.
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;

    // The catalog is fixed for the process lifetime; every session gets its
    // own copy to mutate against.
    let catalog = catalog::load(config.catalog_path.as_deref())?;

    let state = Arc::new(api::ApiState {
        catalog,
        default_pool: config.default_pool,
        store: Mutex::new(SessionStore::new()),
    });

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/catalog", get(api::get_catalog))
        .route("/sessions", post(api::create_session))
        .route(
            "/sessions/:id",
            get(api::get_session).delete(api::delete_session),
        )
        .route("/sessions/:id/pool", put(api::set_pool))
        .route("/sessions/:id/scenario", post(api::load_scenario))
        .route(
            "/sessions/:id/projects/:project_id/contribution",
            put(api::set_contribution_amount),
        )
        .route(
            "/sessions/:id/projects/:project_id/contributors",
            put(api::set_contributor_count),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
