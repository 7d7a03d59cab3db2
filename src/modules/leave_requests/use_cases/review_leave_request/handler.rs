use serde_json::json;
use std::sync::Arc;

use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::modules::leave_requests::core::ports::LeaveRequestRepository;
use crate::modules::leave_requests::use_cases::review_leave_request::command::ReviewLeaveRequest;
use crate::modules::leave_requests::use_cases::review_leave_request::decide::decide_review;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::record_store::StoreError;

pub struct ReviewLeaveRequestHandler {
    requests: Arc<dyn LeaveRequestRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl ReviewLeaveRequestHandler {
    pub fn new(requests: Arc<dyn LeaveRequestRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { requests, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, command: ReviewLeaveRequest) -> Result<LeaveRequest, ServiceError> {
        let current = self
            .requests
            .get(&command.request_id)
            .await?
            .ok_or(ServiceError::NotFound("Leave request"))?;
        let reviewed = decide_review(actor, &current, command)?;
        let stored = match self.requests.transition(current.status, &reviewed).await {
            Ok(stored) => stored,
            Err(StoreError::ConditionFailed(_)) => return Err(self.reviewed_meanwhile(&reviewed.request_id).await),
            Err(StoreError::MissingRecord(_)) => return Err(ServiceError::NotFound("Leave request")),
            Err(error) => return Err(error.into()),
        };

        let action = match stored.status {
            LeaveStatus::Declined => "leave_request_declined",
            _ => "leave_request_approved",
        };
        record_best_effort(
            &*self.audit_log,
            action,
            &actor.user_id,
            json!({ "request_id": stored.request_id, "user_id": stored.user_id }),
        )
        .await;
        tracing::info!(
            request_id = %stored.request_id,
            status = %stored.status,
            reviewed_by = %actor.user_id,
            "leave request reviewed"
        );
        Ok(stored)
    }

    /// Another review landed between our read and our write.
    async fn reviewed_meanwhile(&self, request_id: &str) -> ServiceError {
        match self.requests.get(request_id).await {
            Ok(Some(request)) => ServiceError::AlreadyReviewed(request.status.to_string()),
            Ok(None) => ServiceError::NotFound("Leave request"),
            Err(error) => error.into(),
        }
    }
}
