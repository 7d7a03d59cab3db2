use chrono::{DateTime, Duration, Utc};

use crate::modules::time_entries::core::time_entry::{AttendanceType, TimeEntry, WorkLocation};

/// A stored office entry of `total_hours` without break or overtime, owned
/// by `u-1` and created at its own start instant.
pub fn make_work_entry(time_entry_id: &str, start: &str, total_hours: f64) -> TimeEntry {
    let start_time = DateTime::parse_from_rfc3339(start).unwrap();
    let end_time = start_time + Duration::minutes((total_hours * 60.0).round() as i64);
    TimeEntry {
        time_entry_id: time_entry_id.to_string(),
        user_id: "u-1".to_string(),
        start_time,
        end_time,
        break_hours: 0.0,
        total_hours,
        is_overtime: false,
        overtime_hours: 0.0,
        context: None,
        attendance_type: AttendanceType::Work,
        work_location: Some(WorkLocation::Office),
        created_at: start_time.with_timezone(&Utc),
        updated_at: None,
    }
}
