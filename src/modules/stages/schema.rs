use serde::{Deserialize, Serialize};

use super::model::StageDetails;

// =============================================================================
// CREATE
// =============================================================================

pub const REQUIRED_FIELDS: [&str; 5] = ["id_etudiant", "entreprise", "sujet", "date_debut", "date_fin"];

/// Student id as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    Text(String),
}

impl StudentId {
    pub fn value(&self) -> Option<i64> {
        match self {
            StudentId::Number(id) => Some(*id),
            StudentId::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStageRequest {
    pub id_etudiant: StudentId,
    pub entreprise: String,
    pub sujet: String,
    pub date_debut: String,
    pub date_fin: String,
}

#[derive(Debug, Serialize)]
pub struct CreateStageResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: i64,
}

// =============================================================================
// REVIEW
// =============================================================================

#[derive(Debug, Serialize)]
pub struct StageReviewResponse {
    pub success: bool,
    pub message: String,
    pub stage: StageDetails,
}
