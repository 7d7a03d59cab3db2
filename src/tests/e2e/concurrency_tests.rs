use chrono::NaiveDate;
use rstest::rstest;

use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::shared::core::actor::{Actor, Role};
use crate::shell::state::InMemoryBackend;
use crate::tests::fixtures::commands::RegisterTimeEntryBuilder;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_keep_the_day_consistent_under_concurrent_creates() {
    let backend = InMemoryBackend::default();
    let actor = Actor::new("u-1", Role::Employee);
    let slots = [
        ("te-1", "2025-03-03T00:00:00Z", "2025-03-03T05:00:00Z"),
        ("te-2", "2025-03-03T05:00:00Z", "2025-03-03T10:30:00Z"),
        ("te-3", "2025-03-03T10:30:00Z", "2025-03-03T16:00:00Z"),
        ("te-4", "2025-03-03T16:00:00Z", "2025-03-03T23:00:00Z"),
    ];

    let tasks = slots.iter().map(|(id, start, end)| {
        let handler = backend.register_time_entry.clone();
        let actor = actor.clone();
        let command = RegisterTimeEntryBuilder::new()
            .time_entry_id(*id)
            .times(start, end)
            .build();
        tokio::spawn(async move { handler.handle(&actor, command).await })
    });
    for task in tasks.collect::<Vec<_>>() {
        task.await.unwrap().unwrap();
    }

    let entries = backend.time_entries.list_by_user("u-1").await.unwrap();
    let total: f64 = entries.iter().map(|e| e.total_hours).sum();
    let allocated: f64 = entries.iter().map(|e| e.overtime_hours).sum();
    assert_eq!(entries.len(), 4);
    assert_eq!(total, 23.0);
    // Four entries on a weekday expect 32 hours, so nothing is overtime.
    assert_eq!(allocated, 0.0);

    let day = backend
        .aggregator
        .recompute_day("u-1", NaiveDate::from_ymd_opt(2025, 3, 3).unwrap())
        .await
        .unwrap();
    assert_eq!(day.overtime_hours, allocated);
    assert_eq!(backend.aggregator.day_locks().tracked_slots().await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_accept_exactly_one_of_several_identical_creates() {
    let backend = InMemoryBackend::default();
    let actor = Actor::new("u-1", Role::Employee);

    let tasks = (0..5).map(|n| {
        let handler = backend.register_time_entry.clone();
        let actor = actor.clone();
        let command = RegisterTimeEntryBuilder::new()
            .time_entry_id(format!("te-{n}"))
            .times("2025-03-08T09:00:00Z", "2025-03-08T12:00:00Z")
            .build();
        tokio::spawn(async move { handler.handle(&actor, command).await })
    });
    let mut accepted = 0;
    for task in tasks.collect::<Vec<_>>() {
        if task.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    let entries = backend.time_entries.list_by_user("u-1").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].overtime_hours, 3.0);
}
