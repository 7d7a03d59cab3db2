use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::leave_requests::core::leave_request::LeaveType;
use crate::modules::leave_requests::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitLeaveRequestBody {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub half_day: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<SubmitLeaveRequestBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitLeaveRequest {
        request_id: Uuid::now_v7().to_string(),
        leave_type: body.leave_type,
        start_date: body.start_date,
        end_date: body.end_date,
        description: body.description,
        half_day: body.half_day,
        requested_at: Utc::now(),
    };

    match state.submit_leave_request.handle(&actor, command).await {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(error) => error.into_response(),
    }
}
