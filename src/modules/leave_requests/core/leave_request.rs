use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    StatutoryHoliday,
    NonStatutoryHoliday,
    PaidLeave,
    SpecialLeave,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::StatutoryHoliday => "statutory_holiday",
            LeaveType::NonStatutoryHoliday => "non_statutory_holiday",
            LeaveType::PaidLeave => "paid_leave",
            LeaveType::SpecialLeave => "special_leave",
        }
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "statutory_holiday" => Ok(LeaveType::StatutoryHoliday),
            "non_statutory_holiday" => Ok(LeaveType::NonStatutoryHoliday),
            "paid_leave" => Ok(LeaveType::PaidLeave),
            "special_leave" => Ok(LeaveType::SpecialLeave),
            other => Err(format!("unknown leave type {other}")),
        }
    }
}

/// `Pending` moves to `Approved` or `Declined`; both are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Declined,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Declined => "declined",
        }
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "declined" => Ok(LeaveStatus::Declined),
            other => Err(format!("unknown leave status {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRequest {
    pub request_id: String,
    pub user_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub half_day: bool,
    pub status: LeaveStatus,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
