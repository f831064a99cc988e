use async_trait::async_trait;

use super::model::{NewStage, StageDetails, StageFilter, StageInsertOutcome, StageStats, StageStatus};
use crate::error::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

#[async_trait]
pub trait StageRepository: Send + Sync {
    /// Most recently declared first.
    async fn list_stages(&self, filter: StageFilter) -> Result<Vec<StageDetails>>;
    async fn get_stage(&self, id: i64) -> Result<Option<StageDetails>>;

    /// Checks that `id_etudiant` is a student, then inserts a pending stage.
    async fn insert_stage(&self, stage: &NewStage) -> Result<StageInsertOutcome>;

    /// `None` when no stage has this id; otherwise the refreshed record.
    async fn update_stage_status(&self, id: i64, status: StageStatus) -> Result<Option<StageDetails>>;

    /// Per-status counts plus the five most recent declarations.
    async fn compute_stats(&self) -> Result<StageStats>;
}
