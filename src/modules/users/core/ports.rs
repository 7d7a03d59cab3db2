use async_trait::async_trait;

use crate::modules::users::core::user::{User, UserCredentials};
use crate::shared::infrastructure::record_store::StoreError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Internal accessor for authentication. Never expose the result to clients.
    async fn credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    /// Fails with `StoreError::ConditionFailed` when the id or the email is
    /// already taken.
    async fn insert(&self, credentials: &UserCredentials) -> Result<(), StoreError>;
    /// Overwrites the profile, and the password hash when one is given.
    /// Fails with `StoreError::ConditionFailed` when another user holds the email.
    async fn update(&self, user: &User, password_hash: Option<&str>) -> Result<User, StoreError>;
    async fn delete(&self, user_id: &str) -> Result<bool, StoreError>;
}
