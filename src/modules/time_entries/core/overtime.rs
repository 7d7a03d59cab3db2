// Daily overtime arithmetic.
//
// On a working day the expected hours scale with the number of entries
// (`entries * threshold`), so several short sessions never add up to overtime
// on their own. On a weekend or holiday every work hour is overtime. The
// day's overtime is then split across the entries in proportion to their
// hours.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::time_entries::core::hours::round_hours;
use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeAllocation {
    pub time_entry_id: String,
    pub overtime_hours: f64,
    pub is_overtime: bool,
}

/// Result of aggregating one user's work entries on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOvertime {
    pub user_id: String,
    pub date: NaiveDate,
    pub non_working_day: bool,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub allocations: Vec<OvertimeAllocation>,
}

impl DailyOvertime {
    pub fn empty(user_id: &str, date: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            date,
            non_working_day: false,
            total_hours: 0.0,
            overtime_hours: 0.0,
            allocations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn allocation_for(&self, time_entry_id: &str) -> Option<&OvertimeAllocation> {
        self.allocations
            .iter()
            .find(|allocation| allocation.time_entry_id == time_entry_id)
    }
}

pub fn daily_overtime_hours(entry_hours: &[f64], non_working_day: bool, threshold_hours: f64) -> f64 {
    let total: f64 = entry_hours.iter().sum();
    if non_working_day {
        return round_hours(total);
    }
    let expected = entry_hours.len() as f64 * threshold_hours;
    round_hours((total - expected).max(0.0))
}

/// Proportional share of `daily_overtime` for each entry. Entries without
/// hours, or days without overtime, get zero.
pub fn distribute(entries: &[TimeEntry], daily_overtime: f64) -> Vec<OvertimeAllocation> {
    let total: f64 = entries.iter().map(|entry| entry.total_hours).sum();
    entries
        .iter()
        .map(|entry| {
            let overtime_hours = if total > 0.0 && daily_overtime > 0.0 {
                round_hours(entry.total_hours / total * daily_overtime)
            } else {
                0.0
            };
            OvertimeAllocation {
                time_entry_id: entry.time_entry_id.clone(),
                overtime_hours,
                is_overtime: overtime_hours > 0.0,
            }
        })
        .collect()
}

/// Aggregates the given work entries of `user_id` on `date`.
pub fn aggregate_day(
    user_id: &str,
    date: NaiveDate,
    entries: &[TimeEntry],
    non_working_day: bool,
    threshold_hours: f64,
) -> DailyOvertime {
    let hours: Vec<f64> = entries.iter().map(|entry| entry.total_hours).collect();
    let overtime_hours = daily_overtime_hours(&hours, non_working_day, threshold_hours);
    DailyOvertime {
        user_id: user_id.to_string(),
        date,
        non_working_day,
        total_hours: round_hours(hours.iter().sum()),
        overtime_hours,
        allocations: distribute(entries, overtime_hours),
    }
}
