use serde_json::json;
use std::sync::Arc;

use crate::modules::leave_requests::core::leave_request::LeaveRequest;
use crate::modules::leave_requests::core::ports::LeaveRequestRepository;
use crate::modules::leave_requests::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::modules::leave_requests::use_cases::submit_leave_request::decide::decide_submit;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};

pub struct SubmitLeaveRequestHandler {
    requests: Arc<dyn LeaveRequestRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl SubmitLeaveRequestHandler {
    pub fn new(requests: Arc<dyn LeaveRequestRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { requests, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, command: SubmitLeaveRequest) -> Result<LeaveRequest, ServiceError> {
        let request = decide_submit(actor, command)?;
        self.requests.insert(&request).await?;

        record_best_effort(
            &*self.audit_log,
            "leave_request_created",
            &actor.user_id,
            json!({ "request_id": request.request_id, "leave_type": request.leave_type }),
        )
        .await;
        tracing::info!(
            request_id = %request.request_id,
            user_id = %request.user_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            "leave request submitted"
        );
        Ok(request)
    }
}
