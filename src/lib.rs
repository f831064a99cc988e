pub mod config;
pub mod error;
pub mod extract;
pub mod modules;
pub mod services;

use axum::{
    extract::State,
    middleware,
    routing::{any, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use config::{DatabaseStatus, DbPool, StorageProbe};
use error::{ApiError, NOT_FOUND};
use modules::auth::{auth_routes, crud::UserCrud, interface::UserRepository};
use modules::stages::{crud::StageCrud, interface::StageRepository, stage_routes};
use modules::users::user_routes;
use services::request_log::log_requests;

pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub stages: Arc<dyn StageRepository>,
    pub storage: Arc<dyn StorageProbe>,
}

impl AppState {
    /// State backed by the MySQL pool.
    pub fn new(db: DbPool) -> Self {
        Self {
            users: Arc::new(UserCrud::new(db.clone())),
            stages: Arc::new(StageCrud::new(db.clone())),
            storage: Arc::new(db),
        }
    }
}

/// Builds the full router: the JSON API under `/api` and the front-end
/// served from `frontend_dir` for every other path.
pub fn create_app(state: AppState, frontend_dir: impl AsRef<Path>) -> Router {
    let state = Arc::new(state);

    let frontend_dir = frontend_dir.as_ref();
    let frontend = ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    let api = Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(stage_routes())
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        // The nested router does not see the trailing-slash root.
        .route("/api/", any(api_not_found))
        .fallback_service(frontend)
        .layer(middleware::from_fn(log_requests))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    database: DatabaseStatus,
    version: &'static str,
}

// Always 200; storage reachability is reported, not enforced.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        database: state.storage.ping().await,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}
