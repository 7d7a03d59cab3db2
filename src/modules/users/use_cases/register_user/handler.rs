use serde_json::json;
use std::sync::Arc;

use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decide::decide_register;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::record_store::StoreError;

pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { users, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, command: RegisterUser) -> Result<User, ServiceError> {
        let existing = self.users.find_by_email(&command.email).await?;
        let credentials = decide_register(actor, existing.as_ref(), command)?;
        match self.users.insert(&credentials).await {
            Ok(()) => {}
            Err(StoreError::ConditionFailed(_)) => {
                return Err(ServiceError::DuplicateEmail(credentials.user.email.clone()));
            }
            Err(error) => return Err(error.into()),
        }

        record_best_effort(
            &*self.audit_log,
            "user_created",
            &actor.user_id,
            json!({ "user_id": credentials.user.user_id }),
        )
        .await;
        tracing::info!(user_id = %credentials.user.user_id, role = %credentials.user.role, "user created");
        Ok(credentials.user)
    }
}
