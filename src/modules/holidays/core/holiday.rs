use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A registered public holiday. At most one per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    pub holiday_id: String,
    pub date: NaiveDate,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
