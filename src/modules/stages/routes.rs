use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn stage_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stages", get(controller::list_stages).post(controller::create_stage))
        .route("/stages/{id}", get(controller::get_stage))
        .route("/stages/etudiant/{id}", get(controller::list_student_stages))
        .route("/stages/{id}/validate", post(controller::validate_stage).put(controller::validate_stage))
        .route("/stages/{id}/reject", post(controller::reject_stage).put(controller::reject_stage))
        .route("/stats", get(controller::get_stats))
}
