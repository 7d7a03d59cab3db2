use chrono::{DateTime, FixedOffset};

use crate::shared::core::errors::ServiceError;

/// Rounds to two decimals, half away from zero.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Net hours between `start` and `end` minus the break, floored at zero.
///
/// Negative breaks are rejected by callers before this runs.
pub fn compute_hours(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    break_hours: f64,
) -> Result<f64, ServiceError> {
    if end <= start {
        return Err(ServiceError::InvalidRange);
    }
    let seconds = (end - start).num_milliseconds() as f64 / 1000.0;
    let hours = round_hours(seconds / 3600.0 - break_hours);
    Ok(if hours > 0.0 { hours } else { 0.0 })
}
