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
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn backend() -> InMemoryBackend {
    let backend = InMemoryBackend::default();
    seed_user(&backend, "u-1", Role::Employee).await;
    seed_user(&backend, "u-2", Role::Employee).await;
    seed_user(&backend, "admin", Role::Admin).await;
    backend
}

async fn submit(backend: &InMemoryBackend, user_id: &str) -> String {
    let (status, json) = call(
        backend,
        "POST",
        "/api/leave-requests",
        user_id,
        Some(r#"{"leave_type":"paid_leave","start_date":"2025-04-01","end_date":"2025-04-02","description":"<i>trip</i>"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "pending");
    assert_eq!(json["description"], "trip");
    json["request_id"].as_str().unwrap().to_string()
}

#[rstest]
#[tokio::test]
async fn it_should_approve_a_pending_request_once() {
    let backend = backend().await;
    let id = submit(&backend, "u-1").await;

    let (status, json) = call(&backend, "POST", &format!("/api/leave-requests/{id}/approve"), "admin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "approved");
    assert_eq!(json["reviewed_by"], "admin");

    let (status, json) = call(
        &backend,
        "POST",
        &format!("/api/leave-requests/{id}/decline"),
        "admin",
        Some(r#"{"admin_notes":"changed my mind"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "ALREADY_REVIEWED");

    let (status, _) = call(&backend, "DELETE", &format!("/api/leave-requests/{id}"), "u-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = call(&backend, "DELETE", &format!("/api/leave-requests/{id}"), "admin", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn it_should_require_notes_when_declining() {
    let backend = backend().await;
    let id = submit(&backend, "u-1").await;
    let uri = format!("/api/leave-requests/{id}/decline");

    let (status, json) = call(&backend, "POST", &uri, "admin", Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "NOTES_REQUIRED");

    let (status, json) = call(&backend, "POST", &uri, "admin", Some(r#"{"admin_notes":"team offsite"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "declined");
    assert_eq!(json["admin_notes"], "team offsite");
}

#[rstest]
#[tokio::test]
async fn it_should_keep_requests_private_to_owner_and_admins() {
    let backend = backend().await;
    let id = submit(&backend, "u-1").await;
    submit(&backend, "u-2").await;

    let (status, _) = call(&backend, "GET", &format!("/api/leave-requests/{id}"), "u-2", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&backend, "POST", &format!("/api/leave-requests/{id}/approve"), "u-2", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, mine) = call(&backend, "GET", "/api/leave-requests/mine?status=pending", "u-1", None).await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
    let (_, all) = call(&backend, "GET", "/api/leave-requests", "admin", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    let (status, _) = call(&backend, "GET", "/api/leave-requests", "u-1", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&backend, "DELETE", &format!("/api/leave-requests/{id}"), "u-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_inverted_date_ranges() {
    let backend = backend().await;
    let (status, json) = call(
        &backend,
        "POST",
        "/api/leave-requests",
        "u-1",
        Some(r#"{"leave_type":"special_leave","start_date":"2025-04-03","end_date":"2025-04-01"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "INVALID_DATE_RANGE");
}
