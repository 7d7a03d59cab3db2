use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::holidays::core::calendar::{is_non_working_day, is_weekend};
use crate::modules::holidays::core::ports::HolidayRepository;
use crate::shared::infrastructure::record_store::StoreError;

/// Answers "is this a non-working day". Holiday dates are fetched on every
/// call, so calendar changes are visible immediately.
pub struct HolidayCalendar {
    holidays: Arc<dyn HolidayRepository>,
}

impl HolidayCalendar {
    pub fn new(holidays: Arc<dyn HolidayRepository>) -> Self {
        Self { holidays }
    }

    pub async fn is_non_working_day(&self, date: NaiveDate) -> Result<bool, StoreError> {
        if is_weekend(date) {
            return Ok(true);
        }
        let dates = self.holidays.holiday_dates().await?;
        Ok(is_non_working_day(date, &dates))
    }
}
