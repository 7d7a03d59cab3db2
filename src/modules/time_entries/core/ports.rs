use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::modules::time_entries::core::overtime::OvertimeAllocation;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::record_store::StoreError;

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn get(&self, time_entry_id: &str) -> Result<Option<TimeEntry>, StoreError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, StoreError>;
    /// Entries of `user_id` whose start and end are the same instants.
    async fn find_by_exact_time(
        &self,
        user_id: &str,
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
    ) -> Result<Vec<TimeEntry>, StoreError>;
    async fn list_all(&self) -> Result<Vec<TimeEntry>, StoreError>;
    async fn insert(&self, entry: &TimeEntry) -> Result<(), StoreError>;
    /// Overwrites the stored entry and returns what was stored.
    async fn replace(&self, entry: &TimeEntry) -> Result<TimeEntry, StoreError>;
    /// Sets only the overtime fields of each listed entry, all or nothing.
    async fn apply_overtime(&self, allocations: &[OvertimeAllocation]) -> Result<(), StoreError>;
    async fn delete(&self, time_entry_id: &str) -> Result<bool, StoreError>;
}
