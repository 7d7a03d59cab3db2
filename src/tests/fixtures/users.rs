use chrono::{TimeZone, Utc};

use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::{User, UserCredentials};
use crate::shared::core::actor::Role;
use crate::shell::state::InMemoryBackend;

pub fn make_user(user_id: &str, email: &str, role: Role) -> User {
    User {
        user_id: user_id.to_string(),
        name: format!("User {user_id}"),
        email: email.to_string(),
        role,
        must_change_password: true,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
        updated_at: None,
    }
}

pub fn make_credentials(user_id: &str, email: &str, role: Role) -> UserCredentials {
    UserCredentials {
        user: make_user(user_id, email, role),
        password_hash: "$argon2id$v=19$fixture".to_string(),
    }
}

/// Registers a caller the `x-user-id` header can resolve.
pub async fn seed_user(backend: &InMemoryBackend, user_id: &str, role: Role) {
    backend
        .users
        .insert(&make_credentials(user_id, &format!("{user_id}@example.com"), role))
        .await
        .unwrap();
}
