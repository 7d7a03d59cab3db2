use serde_json::json;
use std::sync::Arc;

use crate::modules::users::core::ports::UserRepository;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};

/// Deletes the user record only. Time entries and leave requests keep their
/// owner id.
pub struct RemoveUserHandler {
    users: Arc<dyn UserRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl RemoveUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { users, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, user_id: &str) -> Result<(), ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can delete users".into(),
            ));
        }
        if actor.owns(user_id) {
            return Err(ServiceError::AuthorizationDenied(
                "admins cannot delete themselves".into(),
            ));
        }
        if !self.users.delete(user_id).await? {
            return Err(ServiceError::NotFound("User"));
        }
        record_best_effort(
            &*self.audit_log,
            "user_deleted",
            &actor.user_id,
            json!({ "user_id": user_id }),
        )
        .await;
        tracing::info!(user_id, admin_user_id = %actor.user_id, "user deleted");
        Ok(())
    }
}
