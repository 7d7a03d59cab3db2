use chrono::{DateTime, FixedOffset, Utc};

use crate::modules::time_entries::core::time_entry::{AttendanceType, WorkLocation};

/// Partial update. `None` keeps the stored value; an empty `context` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateTimeEntry {
    pub time_entry_id: String,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub break_hours: Option<f64>,
    pub context: Option<String>,
    pub attendance_type: Option<AttendanceType>,
    pub work_location: Option<WorkLocation>,
    pub requested_at: DateTime<Utc>,
}

impl UpdateTimeEntry {
    pub fn changes_times(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some() || self.break_hours.is_some()
    }
}
