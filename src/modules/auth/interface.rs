use async_trait::async_trait;

use super::model::{RegisterOutcome, Role, User};
use crate::error::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Inserts the user row and its role-specific credential row atomically.
    async fn insert_user_and_auth(
        &self,
        nom: &str,
        email: &str,
        role: Role,
        password_hash: &str,
    ) -> Result<RegisterOutcome>;

    async fn get_auth_hash(&self, email: &str, role: Role) -> Result<Option<String>>;
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Students ordered by name.
    async fn list_students(&self) -> Result<Vec<User>>;
}
