use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::leave_requests::core::leave_request::LeaveType;

#[derive(Debug, Clone)]
pub struct SubmitLeaveRequest {
    pub request_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub half_day: bool,
    pub requested_at: DateTime<Utc>,
}
