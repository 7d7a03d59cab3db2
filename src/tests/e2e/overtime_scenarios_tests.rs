use chrono::{NaiveDate, Utc};
use rstest::rstest;

use crate::modules::holidays::core::ports::HolidayRepository;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::actor::{Actor, Role};
use crate::shared::core::errors::ServiceError;
use crate::shell::state::InMemoryBackend;
use crate::tests::fixtures::commands::RegisterTimeEntryBuilder;
use crate::tests::fixtures::holidays::make_holiday;

fn employee() -> Actor {
    Actor::new("u-1", Role::Employee)
}

async fn log(backend: &InMemoryBackend, id: &str, start: &str, end: &str) -> TimeEntry {
    let command = RegisterTimeEntryBuilder::new()
        .time_entry_id(id)
        .times(start, end)
        .build();
    backend.register_time_entry.handle(&employee(), command).await.unwrap()
}

async fn stored(backend: &InMemoryBackend, id: &str) -> TimeEntry {
    backend.time_entries.get(id).await.unwrap().unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_give_a_single_long_day_its_full_excess() {
    let backend = InMemoryBackend::default();
    let command = RegisterTimeEntryBuilder::new()
        .times("2025-03-03T09:00:00Z", "2025-03-03T19:00:00Z")
        .break_hours(1.0)
        .build();

    let entry = backend.register_time_entry.handle(&employee(), command).await.unwrap();

    assert_eq!(entry.total_hours, 9.0);
    assert_eq!(entry.overtime_hours, 1.0);
    assert!(entry.is_overtime);
    assert_eq!(stored(&backend, "te-1").await, entry);
}

#[rstest]
#[case("2025-03-03T08:00:00Z", "2025-03-03T12:00:00Z", "2025-03-03T13:00:00Z", "2025-03-03T17:00:00Z")]
#[case("2025-03-03T07:00:00Z", "2025-03-03T12:00:00Z", "2025-03-03T13:00:00Z", "2025-03-03T18:00:00Z")]
#[tokio::test]
async fn it_should_scale_the_threshold_with_the_entry_count(
    #[case] first_start: &str,
    #[case] first_end: &str,
    #[case] second_start: &str,
    #[case] second_end: &str,
) {
    let backend = InMemoryBackend::default();
    log(&backend, "te-1", first_start, first_end).await;
    log(&backend, "te-2", second_start, second_end).await;

    for id in ["te-1", "te-2"] {
        let entry = stored(&backend, id).await;
        assert_eq!(entry.overtime_hours, 0.0);
        assert!(!entry.is_overtime);
    }
}

#[rstest]
#[tokio::test]
async fn it_should_count_every_weekend_hour_as_overtime() {
    let backend = InMemoryBackend::default();
    let entry = log(&backend, "te-1", "2025-03-08T09:00:00Z", "2025-03-08T15:00:00Z").await;

    assert_eq!(entry.total_hours, 6.0);
    assert_eq!(entry.overtime_hours, 6.0);
}

#[rstest]
#[tokio::test]
async fn it_should_treat_registered_holidays_like_weekends() {
    let backend = InMemoryBackend::default();
    backend.holidays.insert(&make_holiday("h-1", "2025-03-04")).await.unwrap();

    let first = log(&backend, "te-1", "2025-03-04T08:00:00Z", "2025-03-04T10:00:00Z").await;
    log(&backend, "te-2", "2025-03-04T11:00:00Z", "2025-03-04T14:30:00Z").await;

    assert_eq!(first.overtime_hours, 2.0);
    assert_eq!(stored(&backend, "te-1").await.overtime_hours, 2.0);
    assert_eq!(stored(&backend, "te-2").await.overtime_hours, 3.5);
}

#[rstest]
#[tokio::test]
async fn it_should_shrink_the_remaining_overtime_after_a_delete() {
    let backend = InMemoryBackend::default();
    log(&backend, "te-1", "2025-03-03T06:00:00Z", "2025-03-03T15:00:00Z").await;
    log(&backend, "te-2", "2025-03-03T15:00:00Z", "2025-03-04T00:00:00Z").await;
    assert_eq!(stored(&backend, "te-1").await.overtime_hours, 1.0);
    assert_eq!(stored(&backend, "te-2").await.overtime_hours, 1.0);

    backend
        .delete_time_entry
        .handle(&employee(), "te-2", Utc::now())
        .await
        .unwrap();

    let remaining = stored(&backend, "te-1").await;
    assert_eq!(remaining.total_hours, 9.0);
    assert_eq!(remaining.overtime_hours, 1.0);

    backend
        .delete_time_entry
        .handle(&employee(), "te-1", Utc::now())
        .await
        .unwrap();
    let day = backend
        .aggregator
        .recompute_day("u-1", NaiveDate::from_ymd_opt(2025, 3, 3).unwrap())
        .await
        .unwrap();
    assert!(day.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_reject_duplicates_without_touching_the_day() {
    let backend = InMemoryBackend::default();
    log(&backend, "te-1", "2025-03-03T09:00:00Z", "2025-03-03T18:00:00Z").await;

    let duplicate = RegisterTimeEntryBuilder::new()
        .time_entry_id("te-2")
        .times("2025-03-03T10:00:00+01:00", "2025-03-03T19:00:00+01:00")
        .build();
    let result = backend.register_time_entry.handle(&employee(), duplicate).await;

    assert!(matches!(result, Err(ServiceError::DuplicateEntry)));
    assert_eq!(backend.time_entries.list_by_user("u-1").await.unwrap().len(), 1);
    assert_eq!(stored(&backend, "te-1").await.overtime_hours, 1.0);
}

#[rstest]
#[tokio::test]
async fn it_should_be_idempotent_when_recomputing_twice() {
    let backend = InMemoryBackend::default();
    log(&backend, "te-1", "2025-03-09T06:00:00Z", "2025-03-09T13:00:00Z").await;
    log(&backend, "te-2", "2025-03-09T14:00:00Z", "2025-03-09T20:20:00Z").await;
    log(&backend, "te-3", "2025-03-09T20:30:00Z", "2025-03-09T23:50:00Z").await;
    let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

    let first = backend.aggregator.recompute_day("u-1", date).await.unwrap();
    let snapshot = backend.time_entries.list_by_user("u-1").await.unwrap();
    let second = backend.aggregator.recompute_day("u-1", date).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.time_entries.list_by_user("u-1").await.unwrap(), snapshot);
    let allocated: f64 = snapshot.iter().map(|e| e.overtime_hours).sum();
    assert!((allocated - first.overtime_hours).abs() <= 0.01 * snapshot.len() as f64);
}

#[rstest]
#[tokio::test]
async fn it_should_move_overtime_when_an_entry_changes_day() {
    use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
    use chrono::DateTime;

    let backend = InMemoryBackend::default();
    log(&backend, "te-1", "2025-03-03T06:00:00Z", "2025-03-03T15:00:00Z").await;
    log(&backend, "te-2", "2025-03-03T15:00:00Z", "2025-03-04T00:00:00Z").await;

    let moved = backend
        .update_time_entry
        .handle(
            &employee(),
            UpdateTimeEntry {
                time_entry_id: "te-2".into(),
                start_time: Some(DateTime::parse_from_rfc3339("2025-03-08T09:00:00Z").unwrap()),
                end_time: Some(DateTime::parse_from_rfc3339("2025-03-08T11:00:00Z").unwrap()),
                requested_at: Utc::now(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.total_hours, 2.0);
    assert_eq!(moved.overtime_hours, 2.0);
    assert_eq!(stored(&backend, "te-1").await.overtime_hours, 1.0);
}
