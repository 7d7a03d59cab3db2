use chrono::Datelike;
use std::sync::Arc;

use crate::modules::holidays::core::holiday::Holiday;
use crate::modules::holidays::core::ports::HolidayRepository;
use crate::shared::core::errors::ServiceError;

pub struct HolidayQueries {
    holidays: Arc<dyn HolidayRepository>,
}

impl HolidayQueries {
    pub fn new(holidays: Arc<dyn HolidayRepository>) -> Self {
        Self { holidays }
    }

    /// Every authenticated user may read the calendar.
    pub async fn list(&self, year: Option<i32>) -> Result<Vec<Holiday>, ServiceError> {
        let holidays = self.holidays.list().await?;
        Ok(match year {
            Some(year) => holidays.into_iter().filter(|h| h.date.year() == year).collect(),
            None => holidays,
        })
    }
}
