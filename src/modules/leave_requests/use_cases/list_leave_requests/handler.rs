use std::sync::Arc;

use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::modules::leave_requests::core::ports::LeaveRequestRepository;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;

pub struct LeaveRequestQueries {
    requests: Arc<dyn LeaveRequestRepository>,
}

impl LeaveRequestQueries {
    pub fn new(requests: Arc<dyn LeaveRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn get(&self, actor: &Actor, request_id: &str) -> Result<LeaveRequest, ServiceError> {
        let request = self
            .requests
            .get(request_id)
            .await?
            .ok_or(ServiceError::NotFound("Leave request"))?;
        if !actor.is_admin() && !actor.owns(&request.user_id) {
            return Err(ServiceError::AuthorizationDenied(
                "not enough permissions to view this leave request".into(),
            ));
        }
        Ok(request)
    }

    pub async fn list_mine(
        &self,
        actor: &Actor,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, ServiceError> {
        let requests = self.requests.list_by_user(&actor.user_id).await?;
        Ok(with_status(requests, status))
    }

    pub async fn list_all(
        &self,
        actor: &Actor,
        status: Option<LeaveStatus>,
        user_id: Option<&str>,
    ) -> Result<Vec<LeaveRequest>, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can list all leave requests".into(),
            ));
        }
        let requests = match user_id {
            Some(user_id) => self.requests.list_by_user(user_id).await?,
            None => self.requests.list_all().await?,
        };
        Ok(with_status(requests, status))
    }
}

fn with_status(requests: Vec<LeaveRequest>, status: Option<LeaveStatus>) -> Vec<LeaveRequest> {
    match status {
        Some(status) => requests.into_iter().filter(|r| r.status == status).collect(),
        None => requests,
    }
}
