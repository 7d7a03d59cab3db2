use crate::modules::users::core::user::{User, UserCredentials, normalize_email};
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;

pub fn decide_register(
    actor: &Actor,
    existing: Option<&User>,
    command: RegisterUser,
) -> Result<UserCredentials, ServiceError> {
    if !actor.is_admin() {
        return Err(ServiceError::AuthorizationDenied(
            "only admins can create users".into(),
        ));
    }
    let email = normalize_email(&command.email);
    if existing.is_some() {
        return Err(ServiceError::DuplicateEmail(email));
    }
    Ok(UserCredentials {
        user: User {
            user_id: command.user_id,
            name: command.name.trim().to_string(),
            email,
            role: command.role,
            must_change_password: true,
            created_at: command.requested_at,
            updated_at: None,
        },
        password_hash: command.password_hash,
    })
}
