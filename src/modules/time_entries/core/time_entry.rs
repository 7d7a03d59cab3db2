use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::time_entries::core::overtime::DailyOvertime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    Work,
    StatutoryHoliday,
    PaidLeave,
    SpecialLeave,
}

impl AttendanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceType::Work => "work",
            AttendanceType::StatutoryHoliday => "statutory_holiday",
            AttendanceType::PaidLeave => "paid_leave",
            AttendanceType::SpecialLeave => "special_leave",
        }
    }
}

impl fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "work" => Ok(AttendanceType::Work),
            "statutory_holiday" => Ok(AttendanceType::StatutoryHoliday),
            "paid_leave" => Ok(AttendanceType::PaidLeave),
            "special_leave" => Ok(AttendanceType::SpecialLeave),
            other => Err(format!("unknown attendance type {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    Office,
    ClientSite,
    Remote,
}

impl WorkLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkLocation::Office => "office",
            WorkLocation::ClientSite => "client_site",
            WorkLocation::Remote => "remote",
        }
    }
}

impl FromStr for WorkLocation {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "office" => Ok(WorkLocation::Office),
            "client_site" => Ok(WorkLocation::ClientSite),
            "remote" => Ok(WorkLocation::Remote),
            other => Err(format!("unknown work location {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub break_hours: f64,
    pub total_hours: f64,
    pub is_overtime: bool,
    pub overtime_hours: f64,
    pub context: Option<String>,
    pub attendance_type: AttendanceType,
    pub work_location: Option<WorkLocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TimeEntry {
    /// The calendar day the entry belongs to.
    pub fn work_date(&self) -> NaiveDate {
        work_date_of(self.start_time)
    }

    pub fn is_work(&self) -> bool {
        self.attendance_type == AttendanceType::Work
    }

    pub fn clear_overtime(&mut self) {
        self.overtime_hours = 0.0;
        self.is_overtime = false;
    }

    /// Copies the aggregated overtime of this entry, if the day has one for it.
    pub fn apply_overtime(&mut self, day: &DailyOvertime) {
        if let Some(allocation) = day.allocation_for(&self.time_entry_id) {
            self.overtime_hours = allocation.overtime_hours;
            self.is_overtime = allocation.is_overtime;
        }
    }
}

/// Days are UTC calendar days of the start instant, whatever offset the
/// client sent.
pub fn work_date_of(start_time: DateTime<FixedOffset>) -> NaiveDate {
    start_time.with_timezone(&Utc).date_naive()
}
