use serde::{Deserialize, Serialize};

use super::model::User;

// =============================================================================
// REGISTER
// =============================================================================

// Missing fields deserialize as empty strings so they fail validation with a
// readable message instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: i64,
    pub user: UserSummary,
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserSummary,
}

// =============================================================================
// USER SUMMARY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nom: user.nom,
            email: user.email,
            role: user.role,
        }
    }
}
