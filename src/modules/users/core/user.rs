use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::core::actor::{Actor, Role};

/// Public view of a user. The password hash lives only in [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn as_actor(&self) -> Actor {
        Actor::new(self.user_id.clone(), self.role)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
