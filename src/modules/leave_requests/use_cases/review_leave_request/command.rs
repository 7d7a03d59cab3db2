use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Decline,
}

#[derive(Debug, Clone)]
pub struct ReviewLeaveRequest {
    pub request_id: String,
    pub decision: ReviewDecision,
    pub admin_notes: Option<String>,
    pub requested_at: DateTime<Utc>,
}
