use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::leave_requests::use_cases::review_leave_request::command::{ReviewDecision, ReviewLeaveRequest};
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct ReviewLeaveRequestBody {
    pub admin_notes: Option<String>,
}

pub async fn approve(
    State(state): State<AppState>,
    actor: Actor,
    Path(request_id): Path<String>,
    body: Result<Json<ReviewLeaveRequestBody>, JsonRejection>,
) -> Response {
    review(state, actor, request_id, ReviewDecision::Approve, body).await
}

pub async fn decline(
    State(state): State<AppState>,
    actor: Actor,
    Path(request_id): Path<String>,
    body: Result<Json<ReviewLeaveRequestBody>, JsonRejection>,
) -> Response {
    review(state, actor, request_id, ReviewDecision::Decline, body).await
}

async fn review(
    state: AppState,
    actor: Actor,
    request_id: String,
    decision: ReviewDecision,
    body: Result<Json<ReviewLeaveRequestBody>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(b)) => b,
        Err(JsonRejection::MissingJsonContentType(_)) => ReviewLeaveRequestBody::default(),
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ReviewLeaveRequest {
        request_id,
        decision,
        admin_notes: body.admin_notes,
        requested_at: Utc::now(),
    };

    match state.review_leave_request.handle(&actor, command).await {
        Ok(request) => Json(request).into_response(),
        Err(error) => error.into_response(),
    }
}
