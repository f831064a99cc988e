use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;

// =============================================================================
// STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    EnAttente,
    Valide,
    Refuse,
}

impl StageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StageStatus::EnAttente => "en_attente",
            StageStatus::Valide => "valide",
            StageStatus::Refuse => "refuse",
        }
    }
}

// =============================================================================
// STAGE
// =============================================================================

// A stage joined with the name and email of the student who declared it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StageDetails {
    pub id: i64,
    pub id_etudiant: i64,
    pub entreprise: String,
    pub sujet: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub statut: String,
    pub date_declaration: NaiveDateTime,
    pub etudiant_nom: String,
    pub email: String,
}

/// A stage about to be declared. Dates are already ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStage {
    pub id_etudiant: i64,
    pub entreprise: String,
    pub sujet: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageFilter {
    All,
    ByStudent(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageInsertOutcome {
    Created(i64),
    /// No user with that id, or the user is not a student.
    StudentNotFound,
}

// =============================================================================
// STATS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct StatusCounts {
    pub en_attente: i64,
    pub valide: i64,
    pub refuse: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageStats {
    pub stats: StatusCounts,
    pub derniers_stages: Vec<StageDetails>,
}
