use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::{ApiError, READ_FAILED};
use crate::extract::ApiPath;
use crate::modules::auth::model::User;
use crate::AppState;

// GET /api/users/{id}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .get_user(id)
        .await
        .map_err(ApiError::storage(READ_FAILED))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Utilisateur non trouvé".to_string()))
}

// GET /api/etudiants
pub async fn list_students(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let students = state
        .users
        .list_students()
        .await
        .map_err(ApiError::storage(READ_FAILED))?;

    Ok(Json(students))
}
