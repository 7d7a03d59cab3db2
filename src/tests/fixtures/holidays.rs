use chrono::{NaiveDate, TimeZone, Utc};

use crate::modules::holidays::core::holiday::Holiday;

pub fn make_holiday(holiday_id: &str, date: &str) -> Holiday {
    Holiday {
        holiday_id: holiday_id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        name: format!("Holiday {date}"),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
