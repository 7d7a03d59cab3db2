use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekends and registered holidays. Holidays match on the calendar date only.
pub fn is_non_working_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    is_weekend(date) || holidays.contains(&date)
}
