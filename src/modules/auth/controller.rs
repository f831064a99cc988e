use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::modules::auth::{
    model::{RegisterOutcome, Role},
    schema::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserSummary},
};
use crate::services::{hashing, validation};
use crate::AppState;

const EMAIL_TAKEN: &str = "Cet email est déjà utilisé";
const INVALID_CREDENTIALS: &str = "Email ou mot de passe incorrect";

// =============================================================================
// POST /api/register/student
// =============================================================================

pub async fn register_student(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let nom = req.nom.trim();
    let email = req.email.trim().to_lowercase();

    if let Err(e) = validation::validate_registration(nom, &email, &req.password) {
        tracing::info!(code = %e.code, "registration rejected");
        return Err(e.into());
    }

    let existing = state
        .users
        .find_user_by_email(&email)
        .await
        .map_err(ApiError::storage("Erreur lors de la création du compte"))?;
    if existing.is_some() {
        tracing::warn!(%email, "registration for an email already in use");
        return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hashing::hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "could not hash password");
        ApiError::Internal
    })?;

    let outcome = state
        .users
        .insert_user_and_auth(nom, &email, Role::Etudiant, &password_hash)
        .await
        .map_err(ApiError::storage("Erreur lors de la création du compte"))?;

    let user_id = match outcome {
        RegisterOutcome::Created(id) => id,
        RegisterOutcome::Conflict => {
            tracing::warn!(%email, "duplicate email detected on insert");
            return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
        }
    };

    tracing::info!(user_id, %email, "student registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Compte étudiant créé avec succès",
            user_id,
            user: UserSummary {
                id: user_id,
                nom: nom.to_string(),
                email,
                role: Role::Etudiant.as_str().to_string(),
            },
        }),
    ))
}

// =============================================================================
// POST /api/login
// =============================================================================

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation("Email et mot de passe requis".to_string()));
    }

    let user = state
        .users
        .find_user_by_email(&email)
        .await
        .map_err(ApiError::storage("Erreur lors de l'authentification"))?
        .ok_or_else(|| ApiError::Auth(INVALID_CREDENTIALS.to_string()))?;

    let Some(role) = user.role() else {
        tracing::warn!(user_id = user.id, role = %user.role, "login for a user with an unknown role");
        return Err(ApiError::Auth("Rôle utilisateur invalide".to_string()));
    };

    let stored_hash = state
        .users
        .get_auth_hash(&email, role)
        .await
        .map_err(ApiError::storage("Erreur lors de l'authentification"))?;

    let verified = stored_hash
        .map(|hash| hashing::verify_password(&req.password, &hash))
        .unwrap_or(false);
    if !verified {
        return Err(ApiError::Auth(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!(user_id = user.id, role = role.as_str(), "login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        message: "Connexion réussie",
        user: user.into(),
    }))
}
