use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::holidays::core::ports::HolidayRepository;
use crate::shared::core::actor::{Actor, Role};
use crate::shell::http::router;
use crate::shell::state::InMemoryBackend;
use crate::tests::fixtures::commands::RegisterTimeEntryBuilder;
use crate::tests::fixtures::holidays::make_holiday;
use crate::tests::fixtures::users::seed_user;

async fn query(backend: &InMemoryBackend, user_id: &str, query: &str) -> (StatusCode, Value) {
    let response = router(backend.state.clone())
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .header("x-user-id", user_id)
                .body(Body::from(json!({ "query": query }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn backend_with_overtime() -> InMemoryBackend {
    let backend = InMemoryBackend::default();
    seed_user(&backend, "u-1", Role::Employee).await;
    seed_user(&backend, "u-2", Role::Employee).await;
    seed_user(&backend, "acc", Role::Accountant).await;
    let command = RegisterTimeEntryBuilder::new()
        .times("2025-03-03T08:00:00Z", "2025-03-03T18:00:00Z")
        .build();
    backend
        .register_time_entry
        .handle(&Actor::new("u-1", Role::Employee), command)
        .await
        .unwrap();
    backend
}

#[rstest]
#[tokio::test]
async fn it_should_expose_entries_and_daily_overtime() {
    let backend = backend_with_overtime().await;

    let (status, json) = query(
        &backend,
        "acc",
        r#"{ timeEntriesByUser(userId: "u-1") { timeEntryId workDate overtimeHours isOvertime }
             dailyOvertime(userId: "u-1", date: "2025-03-03") { totalHours overtimeHours nonWorkingDay entries } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("errors").is_none(), "{json}");
    let entries = &json["data"]["timeEntriesByUser"];
    assert_eq!(entries[0]["workDate"], "2025-03-03");
    assert_eq!(entries[0]["overtimeHours"], 2.0);
    assert_eq!(json["data"]["dailyOvertime"]["totalHours"], 10.0);
    assert_eq!(json["data"]["dailyOvertime"]["entries"], 1);
    assert_eq!(json["data"]["dailyOvertime"]["nonWorkingDay"], false);
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_other_users_entries_to_employees() {
    let backend = backend_with_overtime().await;
    let (_, json) = query(&backend, "u-2", r#"{ timeEntriesByUser(userId: "u-1") { timeEntryId } }"#).await;
    assert!(json["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
}

#[rstest]
#[tokio::test]
async fn it_should_list_holidays_by_year() {
    let backend = backend_with_overtime().await;
    backend.holidays.insert(&make_holiday("h-1", "2025-12-25")).await.unwrap();
    backend.holidays.insert(&make_holiday("h-2", "2026-01-01")).await.unwrap();

    let (_, json) = query(&backend, "u-1", "{ holidays(year: 2025) { holidayId date } }").await;
    assert_eq!(json["data"]["holidays"], json!([{ "holidayId": "h-1", "date": "2025-12-25" }]));
}

#[rstest]
#[tokio::test]
async fn it_should_reject_anonymous_queries() {
    let backend = backend_with_overtime().await;
    let (status, _) = query(&backend, "", "{ holidays { date } }").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
