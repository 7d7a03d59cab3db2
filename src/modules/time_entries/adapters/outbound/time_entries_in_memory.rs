use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde_json::{Value as Json, json};

use crate::modules::time_entries::core::overtime::OvertimeAllocation;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{AttendanceType, TimeEntry, WorkLocation};
use crate::shared::infrastructure::record_store::in_memory::InMemoryTable;
use crate::shared::infrastructure::record_store::{Item, StoreError, item};

pub const TIME_ENTRIES_TABLE: &str = "time_tracking_timelogs";

pub struct InMemoryTimeEntries {
    table: InMemoryTable,
}

impl Default for InMemoryTimeEntries {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTimeEntries {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(TIME_ENTRIES_TABLE, "time_entry_id"),
        }
    }

    pub fn table(&self) -> &InMemoryTable {
        &self.table
    }
}

pub fn entry_to_item(entry: &TimeEntry) -> Item {
    match json!({
        "time_entry_id": entry.time_entry_id,
        "user_id": entry.user_id,
        "start_time": entry.start_time.to_rfc3339(),
        "end_time": entry.end_time.to_rfc3339(),
        "break_hours": item::encode_decimal(entry.break_hours),
        "total_hours": item::encode_decimal(entry.total_hours),
        "is_overtime": entry.is_overtime,
        "overtime_hours": item::encode_decimal(entry.overtime_hours),
        "context": entry.context,
        "attendance_type": entry.attendance_type.as_str(),
        "work_location": entry.work_location.map(|location| location.as_str()),
        "created_at": entry.created_at.to_rfc3339(),
        "updated_at": entry.updated_at.map(|at| at.to_rfc3339()),
    }) {
        Json::Object(map) => map,
        _ => Item::new(),
    }
}

fn item_to_entry(record: &Item) -> Result<TimeEntry, StoreError> {
    let key = item::string(record, "<unknown>", "time_entry_id")?;
    let attendance_type = match item::optional_string(record, &key, "attendance_type")? {
        None => AttendanceType::Work,
        Some(_) => item::parse_enum(record, &key, "attendance_type")?,
    };
    let work_location = match item::optional_string(record, &key, "work_location")? {
        None => None,
        Some(_) => Some(item::parse_enum::<WorkLocation>(record, &key, "work_location")?),
    };
    Ok(TimeEntry {
        user_id: item::string(record, &key, "user_id")?,
        start_time: item::instant(record, &key, "start_time")?,
        end_time: item::instant(record, &key, "end_time")?,
        break_hours: item::decimal(record, &key, "break_hours")?,
        total_hours: item::decimal(record, &key, "total_hours")?,
        is_overtime: item::boolean(record, &key, "is_overtime")?,
        overtime_hours: item::decimal(record, &key, "overtime_hours")?,
        context: item::optional_string(record, &key, "context")?,
        attendance_type,
        work_location,
        created_at: item::utc(record, &key, "created_at")?,
        updated_at: item::optional_utc(record, &key, "updated_at")?,
        time_entry_id: key,
    })
}

fn overtime_patch(allocation: &OvertimeAllocation) -> Item {
    let mut patch = Item::new();
    patch.insert(
        "overtime_hours".into(),
        item::encode_decimal(allocation.overtime_hours),
    );
    patch.insert("is_overtime".into(), Json::Bool(allocation.is_overtime));
    patch
}

fn sort_by_start(entries: &mut [TimeEntry]) {
    entries.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then(a.time_entry_id.cmp(&b.time_entry_id))
    });
}

#[async_trait]
impl TimeEntryRepository for InMemoryTimeEntries {
    async fn get(&self, time_entry_id: &str) -> Result<Option<TimeEntry>, StoreError> {
        self.table
            .get(time_entry_id)
            .await?
            .as_ref()
            .map(item_to_entry)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, StoreError> {
        let mut entries = self
            .table
            .query("user_id", user_id)
            .await?
            .iter()
            .map(item_to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_start(&mut entries);
        Ok(entries)
    }

    async fn find_by_exact_time(
        &self,
        user_id: &str,
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let entries = self.list_by_user(user_id).await?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.start_time == start_time && entry.end_time == end_time)
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<TimeEntry>, StoreError> {
        let mut entries = self
            .table
            .scan()
            .await?
            .iter()
            .map(item_to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_start(&mut entries);
        Ok(entries)
    }

    async fn insert(&self, entry: &TimeEntry) -> Result<(), StoreError> {
        self.table.put(entry_to_item(entry)).await
    }

    async fn replace(&self, entry: &TimeEntry) -> Result<TimeEntry, StoreError> {
        let stored = self
            .table
            .merge(&entry.time_entry_id, entry_to_item(entry))
            .await?;
        item_to_entry(&stored)
    }

    async fn apply_overtime(&self, allocations: &[OvertimeAllocation]) -> Result<(), StoreError> {
        if allocations.is_empty() {
            return Ok(());
        }
        let patches = allocations
            .iter()
            .map(|allocation| (allocation.time_entry_id.clone(), overtime_patch(allocation)))
            .collect();
        self.table.update_many(patches).await
    }

    async fn delete(&self, time_entry_id: &str) -> Result<bool, StoreError> {
        self.table.delete(time_entry_id).await
    }
}
