use chrono::{DateTime, Utc};

use crate::shared::core::actor::Role;

/// Partial profile change. `None` leaves the field as stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateUser {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
    pub requested_at: DateTime<Utc>,
}
