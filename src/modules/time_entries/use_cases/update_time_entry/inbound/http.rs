use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::modules::time_entries::core::time_entry::{AttendanceType, WorkLocation};
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTimeEntryBody {
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub break_hours: Option<f64>,
    pub context: Option<String>,
    pub attendance_type: Option<AttendanceType>,
    pub work_location: Option<WorkLocation>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
    body: Result<Json<UpdateTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTimeEntry {
        time_entry_id,
        start_time: body.start_time,
        end_time: body.end_time,
        break_hours: body.break_hours,
        context: body.context,
        attendance_type: body.attendance_type,
        work_location: body.work_location,
        requested_at: Utc::now(),
    };

    match state.update_time_entry.handle(&actor, command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => error.into_response(),
    }
}
