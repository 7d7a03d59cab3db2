use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::time_entries::core::time_entry::{AttendanceType, WorkLocation};
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

fn default_attendance_type() -> AttendanceType {
    AttendanceType::Work
}

#[derive(Deserialize)]
pub struct RegisterTimeEntryBody {
    /// Admins may log time for someone else.
    pub user_id: Option<String>,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub break_hours: f64,
    pub context: Option<String>,
    #[serde(default = "default_attendance_type")]
    pub attendance_type: AttendanceType,
    pub work_location: Option<WorkLocation>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterTimeEntry {
        time_entry_id: Uuid::now_v7().to_string(),
        user_id: body.user_id.unwrap_or_else(|| actor.user_id.clone()),
        start_time: body.start_time,
        end_time: body.end_time,
        break_hours: body.break_hours,
        context: body.context,
        attendance_type: body.attendance_type,
        work_location: body.work_location,
        requested_at: Utc::now(),
    };

    match state.register_time_entry.handle(&actor, command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}
