use async_trait::async_trait;

use super::interface::{Result, StageRepository};
use super::model::{NewStage, StageDetails, StageFilter, StageInsertOutcome, StageStats, StageStatus, StatusCounts};
use crate::config::DbPool;
use crate::error::StoreError;

const STAGE_SELECT: &str = r#"
    SELECT s.id, s.id_etudiant, s.entreprise, s.sujet, s.date_debut, s.date_fin,
           s.statut, s.date_declaration, u.nom AS etudiant_nom, u.email
    FROM stages s
    JOIN users u ON s.id_etudiant = u.id
"#;

const MOST_RECENT_FIRST: &str = "ORDER BY s.date_declaration DESC, s.id DESC";

const RECENT_LIMIT: u32 = 5;

// =============================================================================
// STAGE CRUD
// =============================================================================

pub struct StageCrud {
    pool: DbPool,
}

impl StageCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StageRepository for StageCrud {
    async fn list_stages(&self, filter: StageFilter) -> Result<Vec<StageDetails>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let stages = match filter {
            StageFilter::All => {
                let sql = format!("{STAGE_SELECT} {MOST_RECENT_FIRST}");
                sqlx::query_as::<_, StageDetails>(&sql)
                    .fetch_all(&mut *conn)
                    .await?
            }
            StageFilter::ByStudent(id_etudiant) => {
                let sql = format!("{STAGE_SELECT} WHERE s.id_etudiant = ? {MOST_RECENT_FIRST}");
                sqlx::query_as::<_, StageDetails>(&sql)
                    .bind(id_etudiant)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        Ok(stages)
    }

    async fn get_stage(&self, id: i64) -> Result<Option<StageDetails>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let sql = format!("{STAGE_SELECT} WHERE s.id = ?");
        let stage = sqlx::query_as::<_, StageDetails>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(stage)
    }

    async fn insert_stage(&self, stage: &NewStage) -> Result<StageInsertOutcome> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Unavailable)?;

        let student = sqlx::query("SELECT id FROM users WHERE id = ? AND role = 'etudiant'")
            .bind(stage.id_etudiant)
            .fetch_optional(&mut *tx)
            .await?;

        if student.is_none() {
            tx.rollback().await?;
            return Ok(StageInsertOutcome::StudentNotFound);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO stages (id_etudiant, entreprise, sujet, date_debut, date_fin, statut, date_declaration)
            VALUES (?, ?, ?, ?, ?, ?, NOW())
            "#,
        )
        .bind(stage.id_etudiant)
        .bind(&stage.entreprise)
        .bind(&stage.sujet)
        .bind(stage.date_debut)
        .bind(stage.date_fin)
        .bind(StageStatus::EnAttente.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(StageInsertOutcome::Created(result.last_insert_id() as i64))
    }

    async fn update_stage_status(&self, id: i64, status: StageStatus) -> Result<Option<StageDetails>> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Unavailable)?;

        // MySQL reports zero affected rows when the status is unchanged, so
        // existence is checked separately.
        let existing = sqlx::query("SELECT id FROM stages WHERE id = ? FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query("UPDATE stages SET statut = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let sql = format!("{STAGE_SELECT} WHERE s.id = ?");
        let stage = sqlx::query_as::<_, StageDetails>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(stage)
    }

    async fn compute_stats(&self) -> Result<StageStats> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let stats = sqlx::query_as::<_, StatusCounts>(
            r#"
            SELECT
                COUNT(CASE WHEN statut = 'en_attente' THEN 1 END) AS en_attente,
                COUNT(CASE WHEN statut = 'valide' THEN 1 END) AS valide,
                COUNT(CASE WHEN statut = 'refuse' THEN 1 END) AS refuse,
                COUNT(*) AS total
            FROM stages
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;

        let sql = format!("{STAGE_SELECT} {MOST_RECENT_FIRST} LIMIT ?");
        let derniers_stages = sqlx::query_as::<_, StageDetails>(&sql)
            .bind(RECENT_LIMIT)
            .fetch_all(&mut *conn)
            .await?;

        Ok(StageStats {
            stats,
            derniers_stages,
        })
    }
}
