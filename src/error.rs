use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::validation;

pub const DB_UNAVAILABLE: &str = "Erreur de connexion à la base de données";
pub const READ_FAILED: &str = "Erreur lors de la récupération des données";
pub const INTERNAL: &str = "Une erreur interne est survenue";
pub const NOT_FOUND: &str = "Ressource non trouvée";
pub const INVALID_JSON: &str = "Données JSON manquantes ou invalides";
pub const BODY_TOO_LARGE: &str = "Requête trop volumineuse";

// =============================================================================
// STORAGE ERRORS
// =============================================================================

/// Failure of a data-access operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection could be acquired (pool exhausted, server down, ...).
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// MySQL reports duplicate keys as error 1062 / SQLSTATE 23000.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation()
                || db_err.message().contains("Duplicate entry")
                || db_err.code().is_some_and(|code| code.as_ref() == "1062")
        }
        _ => false,
    }
}

// =============================================================================
// API ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("{}", DB_UNAVAILABLE)]
    StorageUnavailable,

    #[error("{0}")]
    Storage(&'static str),

    #[error("{}", BODY_TOO_LARGE)]
    PayloadTooLarge,

    #[error("{}", INTERNAL)]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs a storage failure and replaces it with a client-safe message.
    ///
    /// Driver text never reaches the response body.
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |err| match err {
            StoreError::Unavailable(e) => {
                tracing::error!(error = %e, context = message, "database connection failed");
                ApiError::StorageUnavailable
            }
            StoreError::Database(e) => {
                tracing::error!(error = %e, "{}", message);
                ApiError::Storage(message)
            }
        }
    }
}

impl From<validator::ValidationError> for ApiError {
    fn from(err: validator::ValidationError) -> Self {
        Self::Validation(validation::message_of(&err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::Validation(INVALID_JSON.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "path parameter did not match");
        Self::NotFound(NOT_FOUND.to_string())
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
