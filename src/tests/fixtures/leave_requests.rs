use chrono::{NaiveDate, TimeZone, Utc};

use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus, LeaveType};

/// A pending two-day paid leave in early April 2025.
pub fn make_leave_request(request_id: &str, user_id: &str) -> LeaveRequest {
    LeaveRequest {
        request_id: request_id.to_string(),
        user_id: user_id.to_string(),
        leave_type: LeaveType::PaidLeave,
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        description: "Family visit".to_string(),
        half_day: false,
        status: LeaveStatus::Pending,
        admin_notes: None,
        reviewed_by: None,
        reviewed_at: None,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        updated_at: None,
    }
}
