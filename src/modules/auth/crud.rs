use async_trait::async_trait;

use super::interface::{Result, UserRepository};
use super::model::{RegisterOutcome, Role, User};
use crate::config::DbPool;
use crate::error::{is_unique_violation, StoreError};

pub struct UserCrud {
    pool: DbPool,
}

impl UserCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserCrud {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let user = sqlx::query_as::<_, User>("SELECT id, nom, email, role FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(user)
    }

    async fn insert_user_and_auth(
        &self,
        nom: &str,
        email: &str,
        role: Role,
        password_hash: &str,
    ) -> Result<RegisterOutcome> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Unavailable)?;

        let inserted = sqlx::query("INSERT INTO users (nom, email, role) VALUES (?, ?, ?)")
            .bind(nom)
            .bind(email)
            .bind(role.as_str())
            .execute(&mut *tx)
            .await;

        let user_id = match inserted {
            Ok(result) => result.last_insert_id() as i64,
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                return Ok(RegisterOutcome::Conflict);
            }
            Err(e) => return Err(e.into()),
        };

        // Table names cannot be bound; `auth_table` only yields fixed identifiers.
        let auth_insert = format!(
            "INSERT INTO {} (user_id, email, password_hash) VALUES (?, ?, ?)",
            role.auth_table()
        );
        let inserted = sqlx::query(&auth_insert)
            .bind(user_id)
            .bind(email)
            .bind(password_hash)
            .execute(&mut *tx)
            .await;

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                return Ok(RegisterOutcome::Conflict);
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;
        Ok(RegisterOutcome::Created(user_id))
    }

    async fn get_auth_hash(&self, email: &str, role: Role) -> Result<Option<String>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let query = format!("SELECT password_hash FROM {} WHERE email = ?", role.auth_table());
        let row: Option<(String,)> = sqlx::query_as(&query)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|(hash,)| hash))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let user = sqlx::query_as::<_, User>("SELECT id, nom, email, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(user)
    }

    async fn list_students(&self) -> Result<Vec<User>> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Unavailable)?;

        let students = sqlx::query_as::<_, User>(
            "SELECT id, nom, email, role FROM users WHERE role = ? ORDER BY nom, id",
        )
        .bind(Role::Etudiant.as_str())
        .fetch_all(&mut *conn)
        .await?;

        Ok(students)
    }
}
