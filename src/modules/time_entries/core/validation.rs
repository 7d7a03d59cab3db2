use chrono::{DateTime, FixedOffset};

use crate::modules::time_entries::core::hours::compute_hours;
use crate::modules::time_entries::core::time_entry::{AttendanceType, TimeEntry, WorkLocation};
use crate::shared::core::errors::ServiceError;

/// Validates a time range and returns its net hours.
pub fn checked_hours(
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    break_hours: f64,
    max_hours_per_day: f64,
) -> Result<f64, ServiceError> {
    if end_time <= start_time {
        return Err(ServiceError::InvalidRange);
    }
    if break_hours.is_nan() || break_hours < 0.0 {
        return Err(ServiceError::BreakNegative);
    }
    let total_hours = compute_hours(start_time, end_time, break_hours)?;
    if total_hours > max_hours_per_day {
        return Err(ServiceError::ExceedsMaxHours {
            max_hours: max_hours_per_day,
        });
    }
    Ok(total_hours)
}

/// Work needs a location. Leave entries never carry one.
pub fn resolve_location(
    attendance_type: AttendanceType,
    work_location: Option<WorkLocation>,
) -> Result<Option<WorkLocation>, ServiceError> {
    match (attendance_type, work_location) {
        (AttendanceType::Work, None) => Err(ServiceError::MissingLocation),
        (AttendanceType::Work, location) => Ok(location),
        _ => Ok(None),
    }
}

/// Rejects `candidate` when another entry of the same user covers exactly
/// the same instants, or when one-per-day is on and the day is taken.
pub fn ensure_unique(
    candidate: &TimeEntry,
    same_time: &[TimeEntry],
    same_day: &[TimeEntry],
    one_log_per_day: bool,
) -> Result<(), ServiceError> {
    let others = |entries: &[TimeEntry]| {
        entries
            .iter()
            .any(|entry| entry.time_entry_id != candidate.time_entry_id)
    };
    if others(same_time) {
        return Err(ServiceError::DuplicateEntry);
    }
    if one_log_per_day && others(same_day) {
        return Err(ServiceError::OneLogPerDay {
            date: candidate.work_date(),
        });
    }
    Ok(())
}
