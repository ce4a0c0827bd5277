//! Axum REST API handlers.
//!
//! Every mutation route locks the store, applies exactly one session
//! mutation (one full engine recompute), and answers with the fresh
//! snapshot. A rejected mutation maps to an error response and leaves the
//! session untouched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use qf_engine::{
    Archetype, CatalogProject, ProjectCatalog, ProjectContribution, ProjectFundingResult,
};

use crate::errors::Result;
use crate::sessions::{HostedSession, SessionStore};

pub struct ApiState {
    pub catalog: ProjectCatalog,
    pub default_pool: f64,
    pub store: Mutex<SessionStore>,
}

// ─────────────────────────────────────────────────────────
// Request / response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub projects: Vec<CatalogProject>,
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub scenario: Option<Archetype>,
    #[serde(default)]
    pub pool: Option<f64>,
}

#[derive(Deserialize)]
pub struct SetPoolRequest {
    pub pool: f64,
}

#[derive(Deserialize)]
pub struct SetAmountRequest {
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct SetContributorsRequest {
    pub count: u32,
}

#[derive(Deserialize)]
pub struct LoadScenarioRequest {
    pub scenario: Archetype,
}

/// Full state of one session, returned by every session route.
#[derive(Serialize)]
pub struct SessionResponse {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub pool: f64,
    pub contributions: Vec<ProjectContribution>,
    pub results: Vec<ProjectFundingResult>,
}

fn snapshot(id: u64, hosted: &HostedSession) -> SessionResponse {
    SessionResponse {
        id,
        created_at: hosted.created_at,
        pool: hosted.session.pool(),
        contributions: hosted.session.contributions().to_vec(),
        results: hosted.session.results().to_vec(),
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /catalog`
pub async fn get_catalog(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    Json(CatalogResponse {
        count: state.catalog.len(),
        projects: state.catalog.projects().to_vec(),
    })
}

/// `POST /sessions`
///
/// Opens a session over the configured catalog. Defaults: the `realistic`
/// scenario and the configured pool.
pub async fn create_session(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse> {
    let scenario = req.scenario.unwrap_or(Archetype::Realistic);
    let pool = req.pool.unwrap_or(state.default_pool);

    let mut store = state.store.lock().await;
    let id = store.create(state.catalog.clone(), pool, scenario)?;
    let hosted = store.get(id)?;
    info!(
        "Session {id} created — scenario {}, pool {pool}",
        scenario.as_str()
    );
    Ok((StatusCode::CREATED, Json(snapshot(id, hosted))))
}

/// `GET /sessions/:id`
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let store = state.store.lock().await;
    let hosted = store.get(id)?;
    Ok(Json(snapshot(id, hosted)))
}

/// `DELETE /sessions/:id`
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let mut store = state.store.lock().await;
    store.remove(id)?;
    info!("Session {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /sessions/:id/pool`
pub async fn set_pool(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
    Json(req): Json<SetPoolRequest>,
) -> Result<impl IntoResponse> {
    let mut store = state.store.lock().await;
    let hosted = store.get_mut(id)?;
    hosted.session.set_matching_pool(req.pool)?;
    debug!("Session {id}: pool set to {}", req.pool);
    Ok(Json(snapshot(id, hosted)))
}

/// `PUT /sessions/:id/projects/:project_id/contribution`
pub async fn set_contribution_amount(
    State(state): State<Arc<ApiState>>,
    Path((id, project_id)): Path<(u64, String)>,
    Json(req): Json<SetAmountRequest>,
) -> Result<impl IntoResponse> {
    let mut store = state.store.lock().await;
    let hosted = store.get_mut(id)?;
    hosted
        .session
        .set_contribution_amount(&project_id, req.amount)?;
    debug!("Session {id}: {project_id} amount set to {}", req.amount);
    Ok(Json(snapshot(id, hosted)))
}

/// `PUT /sessions/:id/projects/:project_id/contributors`
pub async fn set_contributor_count(
    State(state): State<Arc<ApiState>>,
    Path((id, project_id)): Path<(u64, String)>,
    Json(req): Json<SetContributorsRequest>,
) -> Result<impl IntoResponse> {
    let mut store = state.store.lock().await;
    let hosted = store.get_mut(id)?;
    hosted
        .session
        .set_contributor_count(&project_id, req.count)?;
    debug!("Session {id}: {project_id} contributors set to {}", req.count);
    Ok(Json(snapshot(id, hosted)))
}

/// `POST /sessions/:id/scenario`
///
/// Replaces the session's whole contribution set with a fresh draw of the
/// named scenario.
pub async fn load_scenario(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
    Json(req): Json<LoadScenarioRequest>,
) -> Result<impl IntoResponse> {
    let mut store = state.store.lock().await;
    let hosted = store.get_mut(id)?;
    hosted.session.load_scenario(req.scenario)?;
    info!("Session {id}: scenario {} loaded", req.scenario.as_str());
    Ok(Json(snapshot(id, hosted)))
}
