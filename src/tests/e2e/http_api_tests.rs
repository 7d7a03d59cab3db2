use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::Value;
use tower::ServiceExt;

use crate::shared::core::actor::Role;
use crate::shell::http::router;
use crate::shell::state::InMemoryBackend;
use crate::tests::fixtures::users::seed_user;

async fn call(
    backend: &InMemoryBackend,
    method: &str,
    uri: &str,
    user_id: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let response = router(backend.state.clone())
        .oneshot(request.body(Body::from(body.unwrap_or("").to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn backend() -> InMemoryBackend {
    let backend = InMemoryBackend::default();
    seed_user(&backend, "u-1", Role::Employee).await;
    seed_user(&backend, "admin", Role::Admin).await;
    seed_user(&backend, "acc", Role::Accountant).await;
    backend
}

#[rstest]
#[tokio::test]
async fn it_should_recompute_overtime_when_a_holiday_is_added_and_removed() {
    let backend = backend().await;
    let (status, entry) = call(
        &backend,
        "POST",
        "/api/timelogs",
        "u-1",
        Some(r#"{"start_time":"2025-03-04T09:00:00Z","end_time":"2025-03-04T18:00:00Z","work_location":"client_site"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["overtime_hours"], 1.0);
    let entry_uri = format!("/api/timelogs/{}", entry["time_entry_id"].as_str().unwrap());

    let (status, holiday) = call(
        &backend,
        "POST",
        "/api/holidays",
        "admin",
        Some(r#"{"date":"2025-03-04","name":"Carnival"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, refreshed) = call(&backend, "GET", &entry_uri, "u-1", None).await;
    assert_eq!(refreshed["overtime_hours"], 9.0);

    let (_, day) = call(&backend, "GET", "/api/calendar/2025-03-04", "u-1", None).await;
    assert_eq!(day["is_non_working_day"], true);
    assert_eq!(day["is_weekend"], false);

    let holiday_uri = format!("/api/holidays/{}", holiday["holiday_id"].as_str().unwrap());
    let (status, _) = call(&backend, "DELETE", &holiday_uri, "admin", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, refreshed) = call(&backend, "GET", &entry_uri, "u-1", None).await;
    assert_eq!(refreshed["overtime_hours"], 1.0);
}

#[rstest]
#[tokio::test]
async fn it_should_update_and_delete_entries_over_http() {
    let backend = backend().await;
    let (_, entry) = call(
        &backend,
        "POST",
        "/api/timelogs",
        "u-1",
        Some(r#"{"start_time":"2025-03-03T09:00:00Z","end_time":"2025-03-03T17:00:00Z","work_location":"remote"}"#),
    )
    .await;
    let uri = format!("/api/timelogs/{}", entry["time_entry_id"].as_str().unwrap());

    let (status, updated) = call(
        &backend,
        "PATCH",
        &uri,
        "u-1",
        Some(r#"{"end_time":"2025-03-03T20:00:00Z","break_hours":0.5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["total_hours"], 10.5);
    assert_eq!(updated["overtime_hours"], 2.5);

    let (status, _) = call(&backend, "DELETE", &uri, "acc", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&backend, "DELETE", &uri, "u-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, json) = call(&backend, "GET", &uri, "u-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error_code"], "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn it_should_summarize_and_recompute_for_privileged_callers() {
    let backend = backend().await;
    for body in [
        r#"{"start_time":"2025-03-03T08:00:00Z","end_time":"2025-03-03T18:00:00Z","work_location":"office"}"#,
        r#"{"start_time":"2025-03-08T10:00:00Z","end_time":"2025-03-08T12:00:00Z","work_location":"office"}"#,
    ] {
        let (status, _) = call(&backend, "POST", "/api/timelogs", "u-1", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, summary) = call(&backend, "GET", "/api/timelogs/summary?user_id=u-1", "acc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_hours"], 12.0);
    assert_eq!(summary["total_overtime_hours"], 4.0);
    assert_eq!(summary["overtime_entries"], 2);
    assert_eq!(summary["average_hours_per_day"], 6.0);

    let (status, _) = call(&backend, "POST", "/api/admin/recompute-overtime", "acc", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, report) = call(&backend, "POST", "/api/admin/recompute-overtime", "admin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["processed"], 2);
    assert_eq!(report["failed"], 0);
}

#[rstest]
#[tokio::test]
async fn it_should_manage_users_as_admin() {
    let backend = backend().await;
    let (status, user) = call(
        &backend,
        "POST",
        "/api/users",
        "admin",
        Some(r#"{"name":"Grace","email":"Grace@Example.com","role":"accountant","password_hash":"h"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "grace@example.com");
    assert!(user.get("password_hash").is_none());

    let (status, json) = call(
        &backend,
        "POST",
        "/api/users",
        "admin",
        Some(r#"{"name":"Grace","email":"grace@example.com","role":"employee","password_hash":"h"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error_code"], "DUPLICATE_EMAIL");

    let (_, page) = call(&backend, "GET", "/api/users?page=1&page_size=2", "admin", None).await;
    assert_eq!(page["total"], 4);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);

    let uri = format!("/api/users/{}", user["user_id"].as_str().unwrap());
    let (status, _) = call(&backend, "DELETE", &uri, "u-1", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&backend, "DELETE", &uri, "admin", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn it_should_update_users_over_put() {
    let backend = backend().await;

    let (status, user) = call(
        &backend,
        "PUT",
        "/api/users/u-1",
        "admin",
        Some(r#"{"name":"Ada","email":"Ada@Example.com","role":"accountant"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["role"], "accountant");
    assert!(user["updated_at"].is_string());

    let (status, json) = call(&backend, "PUT", "/api/users/u-1", "admin", Some(r#"{"email":"ACC@example.com"}"#)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error_code"], "DUPLICATE_EMAIL");

    let (status, _) = call(&backend, "PUT", "/api/users/u-1", "u-1", Some(r#"{"role":"admin"}"#)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&backend, "PUT", "/api/users/nobody", "admin", Some(r#"{"name":"X"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&backend, "PUT", "/api/users/u-1", "admin", Some(r#"{"role":"superuser"}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let actions = backend.audit_log.actions().await;
    assert_eq!(actions, vec!["user_updated".to_string()]);
}
