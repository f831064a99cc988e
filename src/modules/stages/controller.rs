use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{ApiError, READ_FAILED};
use crate::extract::{ApiJson, ApiPath};
use crate::modules::stages::{
    model::{NewStage, StageDetails, StageFilter, StageInsertOutcome, StageStats, StageStatus},
    schema::{CreateStageRequest, CreateStageResponse, StageReviewResponse, REQUIRED_FIELDS},
};
use crate::services::validation;
use crate::AppState;

const STAGE_NOT_FOUND: &str = "Stage non trouvé";

// =============================================================================
// GET /api/stages, /api/stages/{id}, /api/stages/etudiant/{id}
// =============================================================================

pub async fn list_stages(State(state): State<Arc<AppState>>) -> Result<Json<Vec<StageDetails>>, ApiError> {
    let stages = state
        .stages
        .list_stages(StageFilter::All)
        .await
        .map_err(ApiError::storage(READ_FAILED))?;

    Ok(Json(stages))
}

pub async fn get_stage(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StageDetails>, ApiError> {
    state
        .stages
        .get_stage(id)
        .await
        .map_err(ApiError::storage(READ_FAILED))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(STAGE_NOT_FOUND.to_string()))
}

pub async fn list_student_stages(
    State(state): State<Arc<AppState>>,
    ApiPath(id_etudiant): ApiPath<i64>,
) -> Result<Json<Vec<StageDetails>>, ApiError> {
    let stages = state
        .stages
        .list_stages(StageFilter::ByStudent(id_etudiant))
        .await
        .map_err(ApiError::storage(READ_FAILED))?;

    Ok(Json(stages))
}

// =============================================================================
// POST /api/stages
// =============================================================================

pub async fn create_stage(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<(StatusCode, Json<CreateStageResponse>), ApiError> {
    validation::validate_required_fields(&payload, &REQUIRED_FIELDS)?;

    let req: CreateStageRequest = serde_json::from_value(payload).map_err(|e| {
        tracing::info!(error = %e, "stage payload has unexpected field types");
        ApiError::Validation("Données de stage invalides".to_string())
    })?;

    let (date_debut, date_fin) = validation::validate_stage_dates(&req.date_debut, &req.date_fin)?;

    let id_etudiant = req
        .id_etudiant
        .value()
        .ok_or_else(|| ApiError::Validation("Identifiant étudiant invalide".to_string()))?;

    let new_stage = NewStage {
        id_etudiant,
        entreprise: req.entreprise.trim().to_string(),
        sujet: req.sujet.trim().to_string(),
        date_debut,
        date_fin,
    };

    let outcome = state
        .stages
        .insert_stage(&new_stage)
        .await
        .map_err(ApiError::storage("Erreur lors de la création du stage"))?;

    match outcome {
        StageInsertOutcome::Created(id) => {
            tracing::info!(stage_id = id, id_etudiant, "stage declared");
            Ok((
                StatusCode::CREATED,
                Json(CreateStageResponse {
                    success: true,
                    message: "Stage déclaré avec succès",
                    id,
                }),
            ))
        }
        StageInsertOutcome::StudentNotFound => Err(ApiError::NotFound("Étudiant non trouvé".to_string())),
    }
}

// =============================================================================
// POST|PUT /api/stages/{id}/validate, /api/stages/{id}/reject
// =============================================================================

pub async fn validate_stage(
    state: State<Arc<AppState>>,
    id: ApiPath<i64>,
) -> Result<Json<StageReviewResponse>, ApiError> {
    review_stage(state, id, StageStatus::Valide).await
}

pub async fn reject_stage(
    state: State<Arc<AppState>>,
    id: ApiPath<i64>,
) -> Result<Json<StageReviewResponse>, ApiError> {
    review_stage(state, id, StageStatus::Refuse).await
}

async fn review_stage(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    status: StageStatus,
) -> Result<Json<StageReviewResponse>, ApiError> {
    let stage = state
        .stages
        .update_stage_status(id, status)
        .await
        .map_err(ApiError::storage("Erreur lors de la mise à jour du stage"))?
        .ok_or_else(|| ApiError::NotFound(STAGE_NOT_FOUND.to_string()))?;

    tracing::info!(stage_id = id, statut = status.as_str(), "stage reviewed");

    Ok(Json(StageReviewResponse {
        success: true,
        message: format!("Stage {} avec succès", status.as_str()),
        stage,
    }))
}

// =============================================================================
// GET /api/stats
// =============================================================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<StageStats>, ApiError> {
    let stats = state
        .stages
        .compute_stats()
        .await
        .map_err(ApiError::storage("Erreur lors de la récupération des statistiques"))?;

    Ok(Json(stats))
}
