use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct RegisterHoliday {
    pub holiday_id: String,
    pub date: NaiveDate,
    pub name: String,
    pub requested_at: DateTime<Utc>,
}
