use async_trait::async_trait;
use serde_json::{Value as Json, json};

use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::modules::leave_requests::core::ports::LeaveRequestRepository;
use crate::shared::infrastructure::record_store::in_memory::InMemoryTable;
use crate::shared::infrastructure::record_store::{Item, StoreError, item};

pub const LEAVE_REQUESTS_TABLE: &str = "time_tracking_leave_requests";

pub struct InMemoryLeaveRequests {
    table: InMemoryTable,
}

impl Default for InMemoryLeaveRequests {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLeaveRequests {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(LEAVE_REQUESTS_TABLE, "request_id"),
        }
    }

    pub fn table(&self) -> &InMemoryTable {
        &self.table
    }
}

fn request_to_item(request: &LeaveRequest) -> Item {
    match json!({
        "request_id": request.request_id,
        "user_id": request.user_id,
        "leave_type": request.leave_type.as_str(),
        "start_date": request.start_date.format("%Y-%m-%d").to_string(),
        "end_date": request.end_date.format("%Y-%m-%d").to_string(),
        "description": request.description,
        "half_day": request.half_day,
        "status": request.status.as_str(),
        "admin_notes": request.admin_notes,
        "reviewed_by": request.reviewed_by,
        "reviewed_at": request.reviewed_at.map(|at| at.to_rfc3339()),
        "created_at": request.created_at.to_rfc3339(),
        "updated_at": request.updated_at.map(|at| at.to_rfc3339()),
    }) {
        Json::Object(map) => map,
        _ => Item::new(),
    }
}

fn item_to_request(record: &Item) -> Result<LeaveRequest, StoreError> {
    let key = item::string(record, "<unknown>", "request_id")?;
    Ok(LeaveRequest {
        user_id: item::string(record, &key, "user_id")?,
        leave_type: item::parse_enum(record, &key, "leave_type")?,
        start_date: item::date(record, &key, "start_date")?,
        end_date: item::date(record, &key, "end_date")?,
        description: item::optional_string(record, &key, "description")?.unwrap_or_default(),
        half_day: item::boolean(record, &key, "half_day")?,
        status: item::parse_enum(record, &key, "status")?,
        admin_notes: item::optional_string(record, &key, "admin_notes")?,
        reviewed_by: item::optional_string(record, &key, "reviewed_by")?,
        reviewed_at: item::optional_utc(record, &key, "reviewed_at")?,
        created_at: item::utc(record, &key, "created_at")?,
        updated_at: item::optional_utc(record, &key, "updated_at")?,
        request_id: key,
    })
}

fn has_status(record: &Item, expected: LeaveStatus) -> bool {
    item::parse_enum::<LeaveStatus>(record, "<condition>", "status").ok() == Some(expected)
}

fn newest_first(items: Vec<Item>) -> Result<Vec<LeaveRequest>, StoreError> {
    let mut requests = items
        .iter()
        .map(item_to_request)
        .collect::<Result<Vec<_>, _>>()?;
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.request_id.cmp(&b.request_id)));
    Ok(requests)
}

#[async_trait]
impl LeaveRequestRepository for InMemoryLeaveRequests {
    async fn get(&self, request_id: &str) -> Result<Option<LeaveRequest>, StoreError> {
        self.table
            .get(request_id)
            .await?
            .as_ref()
            .map(item_to_request)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, StoreError> {
        newest_first(self.table.query("user_id", user_id).await?)
    }

    async fn list_all(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        newest_first(self.table.scan().await?)
    }

    async fn insert(&self, request: &LeaveRequest) -> Result<(), StoreError> {
        self.table.put(request_to_item(request)).await
    }

    async fn transition(&self, expected: LeaveStatus, request: &LeaveRequest) -> Result<LeaveRequest, StoreError> {
        let stored = self
            .table
            .merge_if(
                &request.request_id,
                |record: &Item| has_status(record, expected),
                request_to_item(request),
            )
            .await?;
        item_to_request(&stored)
    }

    async fn delete(&self, request_id: &str) -> Result<bool, StoreError> {
        self.table.delete(request_id).await
    }

    async fn delete_if_status(&self, request_id: &str, expected: LeaveStatus) -> Result<bool, StoreError> {
        self.table
            .delete_if(request_id, |record: &Item| has_status(record, expected))
            .await
    }
}
