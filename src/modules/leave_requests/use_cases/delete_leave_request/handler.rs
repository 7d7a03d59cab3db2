use serde_json::json;
use std::sync::Arc;

use crate::modules::leave_requests::core::leave_request::LeaveRequest;
use crate::modules::leave_requests::core::ports::LeaveRequestRepository;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::record_store::StoreError;

/// Admins delete anything. Owners may withdraw their request while it is
/// still pending.
pub fn ensure_can_delete(actor: &Actor, request: &LeaveRequest) -> Result<(), ServiceError> {
    if actor.is_admin() {
        return Ok(());
    }
    if !actor.owns(&request.user_id) {
        return Err(ServiceError::AuthorizationDenied(
            "not enough permissions to delete this leave request".into(),
        ));
    }
    if request.status.is_final() {
        return Err(ServiceError::AlreadyReviewed(request.status.to_string()));
    }
    Ok(())
}

pub struct DeleteLeaveRequestHandler {
    requests: Arc<dyn LeaveRequestRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl DeleteLeaveRequestHandler {
    pub fn new(requests: Arc<dyn LeaveRequestRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { requests, audit_log }
    }

    pub async fn handle(&self, actor: &Actor, request_id: &str) -> Result<(), ServiceError> {
        let request = self
            .requests
            .get(request_id)
            .await?
            .ok_or(ServiceError::NotFound("Leave request"))?;
        ensure_can_delete(actor, &request)?;
        let deleted = if actor.is_admin() {
            self.requests.delete(request_id).await
        } else {
            self.requests.delete_if_status(request_id, request.status).await
        };
        match deleted {
            Ok(true) => {}
            Ok(false) => return Err(ServiceError::NotFound("Leave request")),
            Err(StoreError::ConditionFailed(_)) => {
                let current = self
                    .requests
                    .get(request_id)
                    .await?
                    .ok_or(ServiceError::NotFound("Leave request"))?;
                return Err(ensure_can_delete(actor, &current)
                    .err()
                    .unwrap_or_else(|| ServiceError::AlreadyReviewed(current.status.to_string())));
            }
            Err(error) => return Err(error.into()),
        }

        record_best_effort(
            &*self.audit_log,
            "leave_request_deleted",
            &actor.user_id,
            json!({ "request_id": request_id, "user_id": request.user_id }),
        )
        .await;
        tracing::info!(request_id, deleted_by = %actor.user_id, "leave request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod leave_request_delete_tests {
    use super::*;
    use crate::modules::leave_requests::adapters::outbound::leave_requests_in_memory::InMemoryLeaveRequests;
    use crate::modules::leave_requests::core::leave_request::LeaveStatus;
    use crate::modules::leave_requests::use_cases::review_leave_request::command::{ReviewDecision, ReviewLeaveRequest};
    use crate::modules::leave_requests::use_cases::review_leave_request::handler::ReviewLeaveRequestHandler;
    use crate::shared::core::actor::Role;
    use crate::shared::infrastructure::audit_log::in_memory::InMemoryAuditLog;
    use crate::tests::fixtures::leave_requests::make_leave_request;
    use rstest::rstest;

    #[rstest]
    #[case(Actor::new("admin", Role::Admin), LeaveStatus::Approved, true)]
    #[case(Actor::new("admin", Role::Admin), LeaveStatus::Pending, true)]
    #[case(Actor::new("u-1", Role::Employee), LeaveStatus::Pending, true)]
    #[case(Actor::new("u-1", Role::Employee), LeaveStatus::Declined, false)]
    #[case(Actor::new("u-2", Role::Accountant), LeaveStatus::Pending, false)]
    fn it_should_gate_deletion_on_owner_and_status(
        #[case] actor: Actor,
        #[case] status: LeaveStatus,
        #[case] allowed: bool,
    ) {
        let mut request = make_leave_request("lr-1", "u-1");
        request.status = status;
        assert_eq!(ensure_can_delete(&actor, &request).is_ok(), allowed);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_request_and_audit_it() {
        let requests = Arc::new(InMemoryLeaveRequests::new());
        requests.insert(&make_leave_request("lr-1", "u-1")).await.unwrap();
        let audit = Arc::new(InMemoryAuditLog::new());
        let handler = DeleteLeaveRequestHandler::new(requests.clone(), audit.clone());
        let owner = Actor::new("u-1", Role::Employee);

        handler.handle(&owner, "lr-1").await.unwrap();
        assert_eq!(requests.get("lr-1").await.unwrap(), None);
        assert_eq!(audit.actions().await, vec!["leave_request_deleted".to_string()]);
        assert!(matches!(
            handler.handle(&owner, "lr-1").await,
            Err(ServiceError::NotFound("Leave request"))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_tell_owners_when_the_request_was_reviewed() {
        let requests = Arc::new(InMemoryLeaveRequests::new());
        let mut approved = make_leave_request("lr-1", "u-1");
        approved.status = LeaveStatus::Approved;
        requests.insert(&approved).await.unwrap();
        let handler = DeleteLeaveRequestHandler::new(requests.clone(), Arc::new(InMemoryAuditLog::new()));

        let result = handler.handle(&Actor::new("u-1", Role::Employee), "lr-1").await;
        assert!(matches!(result, Err(ServiceError::AlreadyReviewed(s)) if s == "approved"));
        assert!(requests.get("lr-1").await.unwrap().is_some());
    }

    /// Reads through to the store, then lets a concurrent writer run before
    /// the caller acts on what it read.
    struct InterleavingRequests(Arc<InMemoryLeaveRequests>);

    #[async_trait::async_trait]
    impl LeaveRequestRepository for InterleavingRequests {
        async fn get(&self, request_id: &str) -> Result<Option<LeaveRequest>, StoreError> {
            let found = self.0.get(request_id).await;
            tokio::task::yield_now().await;
            found
        }
        async fn list_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, StoreError> {
            self.0.list_by_user(user_id).await
        }
        async fn list_all(&self) -> Result<Vec<LeaveRequest>, StoreError> {
            self.0.list_all().await
        }
        async fn insert(&self, request: &LeaveRequest) -> Result<(), StoreError> {
            self.0.insert(request).await
        }
        async fn transition(&self, expected: LeaveStatus, request: &LeaveRequest) -> Result<LeaveRequest, StoreError> {
            self.0.transition(expected, request).await
        }
        async fn delete(&self, request_id: &str) -> Result<bool, StoreError> {
            self.0.delete(request_id).await
        }
        async fn delete_if_status(&self, request_id: &str, expected: LeaveStatus) -> Result<bool, StoreError> {
            self.0.delete_if_status(request_id, expected).await
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_withdraw_a_request_approved_mid_flight() {
        let store = Arc::new(InMemoryLeaveRequests::new());
        store.insert(&make_leave_request("lr-1", "u-1")).await.unwrap();
        let requests: Arc<dyn LeaveRequestRepository> = Arc::new(InterleavingRequests(store.clone()));
        let audit = Arc::new(InMemoryAuditLog::new());
        let deleter = DeleteLeaveRequestHandler::new(requests.clone(), audit.clone());
        let reviewer = ReviewLeaveRequestHandler::new(store.clone(), audit.clone());
        let approve = ReviewLeaveRequest {
            request_id: "lr-1".into(),
            decision: ReviewDecision::Approve,
            admin_notes: None,
            requested_at: chrono::Utc::now(),
        };
        let owner = Actor::new("u-1", Role::Employee);
        let admin = Actor::new("admin", Role::Admin);

        let (withdrawn, reviewed) = tokio::join!(
            deleter.handle(&owner, "lr-1"),
            reviewer.handle(&admin, approve),
        );

        assert_eq!(reviewed.unwrap().status, LeaveStatus::Approved);
        assert!(matches!(withdrawn, Err(ServiceError::AlreadyReviewed(s)) if s == "approved"));
        let stored = store.get("lr-1").await.unwrap().expect("request was deleted");
        assert_eq!(stored.status, LeaveStatus::Approved);
        assert_eq!(audit.actions().await, vec!["leave_request_approved".to_string()]);
    }
}
