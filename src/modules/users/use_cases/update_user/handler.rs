use serde_json::json;
use std::sync::Arc;

use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use crate::modules::users::use_cases::update_user::decide::decide_update;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::record_store::StoreError;

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { users, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, command: UpdateUser) -> Result<User, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can update users".into(),
            ));
        }
        let current = self
            .users
            .get(&command.user_id)
            .await?
            .ok_or(ServiceError::NotFound("User"))?;
        let email_holder = match &command.email {
            Some(email) => self.users.find_by_email(email).await?,
            None => None,
        };
        let changes = decide_update(actor, &current, email_holder.as_ref(), command)?;

        let stored = match self
            .users
            .update(&changes.user, changes.password_hash.as_deref())
            .await
        {
            Ok(stored) => stored,
            Err(StoreError::ConditionFailed(_)) => return Err(ServiceError::DuplicateEmail(changes.user.email.clone())),
            Err(StoreError::MissingRecord(_)) => return Err(ServiceError::NotFound("User")),
            Err(error) => return Err(error.into()),
        };

        record_best_effort(
            &*self.audit_log,
            "user_updated",
            &actor.user_id,
            json!({ "updated_user_id": stored.user_id }),
        )
        .await;
        tracing::info!(user_id = %stored.user_id, updated_by = %actor.user_id, "user updated");
        Ok(stored)
    }
}
