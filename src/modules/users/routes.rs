use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}", get(controller::get_user))
        .route("/etudiants", get(controller::list_students))
}
