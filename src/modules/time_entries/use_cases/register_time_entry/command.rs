use chrono::{DateTime, FixedOffset, Utc};

use crate::modules::time_entries::core::time_entry::{AttendanceType, WorkLocation};

#[derive(Debug, Clone)]
pub struct RegisterTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub break_hours: f64,
    pub context: Option<String>,
    pub attendance_type: AttendanceType,
    pub work_location: Option<WorkLocation>,
    pub requested_at: DateTime<Utc>,
}
