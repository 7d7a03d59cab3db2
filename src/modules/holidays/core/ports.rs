use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::modules::holidays::core::holiday::Holiday;
use crate::shared::infrastructure::record_store::StoreError;

#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn get(&self, holiday_id: &str) -> Result<Option<Holiday>, StoreError>;
    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Holiday>, StoreError>;
    /// Sorted by date.
    async fn list(&self) -> Result<Vec<Holiday>, StoreError>;
    async fn holiday_dates(&self) -> Result<HashSet<NaiveDate>, StoreError>;
    /// Fails with `StoreError::ConditionFailed` when the date already has a holiday.
    async fn insert(&self, holiday: &Holiday) -> Result<(), StoreError>;
    async fn delete(&self, holiday_id: &str) -> Result<bool, StoreError>;
}
