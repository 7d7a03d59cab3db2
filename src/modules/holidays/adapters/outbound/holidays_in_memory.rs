use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Value as Json, json};
use std::collections::HashSet;

use crate::modules::holidays::core::holiday::Holiday;
use crate::modules::holidays::core::ports::HolidayRepository;
use crate::shared::infrastructure::record_store::in_memory::InMemoryTable;
use crate::shared::infrastructure::record_store::{Item, StoreError, item};

pub const HOLIDAYS_TABLE: &str = "time_tracking_holidays";

pub struct InMemoryHolidays {
    table: InMemoryTable,
}

impl Default for InMemoryHolidays {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHolidays {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(HOLIDAYS_TABLE, "holiday_id"),
        }
    }

    pub fn table(&self) -> &InMemoryTable {
        &self.table
    }
}

fn holiday_to_item(holiday: &Holiday) -> Item {
    match json!({
        "holiday_id": holiday.holiday_id,
        "date": holiday.date.format("%Y-%m-%d").to_string(),
        "name": holiday.name,
        "created_at": holiday.created_at.to_rfc3339(),
    }) {
        Json::Object(map) => map,
        _ => Item::new(),
    }
}

fn item_to_holiday(record: &Item) -> Result<Holiday, StoreError> {
    let key = item::string(record, "<unknown>", "holiday_id")?;
    Ok(Holiday {
        date: item::date(record, &key, "date")?,
        name: item::string(record, &key, "name")?,
        created_at: item::utc(record, &key, "created_at")?,
        holiday_id: key,
    })
}

#[async_trait]
impl HolidayRepository for InMemoryHolidays {
    async fn get(&self, holiday_id: &str) -> Result<Option<Holiday>, StoreError> {
        self.table
            .get(holiday_id)
            .await?
            .as_ref()
            .map(item_to_holiday)
            .transpose()
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Holiday>, StoreError> {
        let items = self
            .table
            .query("date", &date.format("%Y-%m-%d").to_string())
            .await?;
        items.first().map(item_to_holiday).transpose()
    }

    async fn list(&self) -> Result<Vec<Holiday>, StoreError> {
        let mut holidays = self
            .table
            .scan()
            .await?
            .iter()
            .map(item_to_holiday)
            .collect::<Result<Vec<_>, _>>()?;
        holidays.sort_by(|a, b| a.date.cmp(&b.date).then(a.name.cmp(&b.name)));
        Ok(holidays)
    }

    async fn holiday_dates(&self) -> Result<HashSet<NaiveDate>, StoreError> {
        let items = self.table.scan().await?;
        items
            .iter()
            .map(|record| {
                let key = item::string(record, "<unknown>", "holiday_id")?;
                item::date(record, &key, "date")
            })
            .collect()
    }

    async fn insert(&self, holiday: &Holiday) -> Result<(), StoreError> {
        self.table.insert_unique(holiday_to_item(holiday), "date").await
    }

    async fn delete(&self, holiday_id: &str) -> Result<bool, StoreError> {
        self.table.delete(holiday_id).await
    }
}

#[cfg(test)]
mod in_memory_holidays_tests {
    use super::*;
    use crate::tests::fixtures::holidays::make_holiday;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_list_holidays_by_date() {
        let holidays = InMemoryHolidays::new();
        holidays.insert(&make_holiday("h-2", "2025-12-25")).await.unwrap();
        holidays.insert(&make_holiday("h-1", "2025-01-01")).await.unwrap();

        let listed = holidays.list().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|h| h.holiday_id.as_str()).collect();
        assert_eq!(ids, ["h-1", "h-2"]);
        assert_eq!(holidays.holiday_dates().await.unwrap().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_dates_stored_as_instants() {
        let holidays = InMemoryHolidays::new();
        let mut record = holiday_to_item(&make_holiday("h-1", "2025-05-05"));
        record.insert("date".into(), json!("2025-05-05T00:00:00"));
        holidays.table().put(record).await.unwrap();

        let dates = holidays.holiday_dates().await.unwrap();
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let holidays = InMemoryHolidays::new();
        holidays.table().toggle_offline();
        assert_eq!(holidays.holiday_dates().await, Err(StoreError::Offline));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_allow_one_holiday_per_date() {
        let holidays = InMemoryHolidays::new();
        holidays.insert(&make_holiday("h-1", "2025-12-25")).await.unwrap();
        let second = holidays.insert(&make_holiday("h-2", "2025-12-25")).await;
        assert_eq!(second, Err(StoreError::ConditionFailed("h-2".into())));
        assert_eq!(holidays.list().await.unwrap().len(), 1);
    }
}
