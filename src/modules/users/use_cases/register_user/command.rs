use chrono::{DateTime, Utc};

use crate::shared::core::actor::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Produced by the upstream identity service; stored as given.
    pub password_hash: String,
    pub requested_at: DateTime<Utc>,
}
