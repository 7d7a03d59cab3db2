use async_trait::async_trait;

use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::shared::infrastructure::record_store::StoreError;

#[async_trait]
pub trait LeaveRequestRepository: Send + Sync {
    async fn get(&self, request_id: &str) -> Result<Option<LeaveRequest>, StoreError>;
    /// Newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, StoreError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<LeaveRequest>, StoreError>;
    async fn insert(&self, request: &LeaveRequest) -> Result<(), StoreError>;
    /// Stores `request` only while the stored status is still `expected`,
    /// failing with `StoreError::ConditionFailed` otherwise.
    async fn transition(&self, expected: LeaveStatus, request: &LeaveRequest) -> Result<LeaveRequest, StoreError>;
    async fn delete(&self, request_id: &str) -> Result<bool, StoreError>;
    /// Deletes only while the stored status is still `expected`.
    async fn delete_if_status(&self, request_id: &str, expected: LeaveStatus) -> Result<bool, StoreError>;
}
