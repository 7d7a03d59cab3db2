use crate::modules::users::core::user::{User, normalize_email};
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;

#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub user: User,
    pub password_hash: Option<String>,
}

/// `email_holder` is whoever currently owns the requested email, if anyone.
pub fn decide_update(
    actor: &Actor,
    current: &User,
    email_holder: Option<&User>,
    command: UpdateUser,
) -> Result<UserChanges, ServiceError> {
    if !actor.is_admin() {
        return Err(ServiceError::AuthorizationDenied(
            "only admins can update users".into(),
        ));
    }
    let email = command.email.as_deref().map(normalize_email);
    match (&email, email_holder) {
        (Some(email), Some(holder)) if holder.user_id != current.user_id => {
            return Err(ServiceError::DuplicateEmail(email.clone()));
        }
        _ => {}
    }

    let mut user = current.clone();
    if let Some(name) = command.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = email {
        user.email = email;
    }
    if let Some(role) = command.role {
        user.role = role;
    }
    user.updated_at = Some(command.requested_at);
    Ok(UserChanges {
        user,
        password_hash: command.password_hash,
    })
}
