use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::holidays::use_cases::register_holiday::command::RegisterHoliday;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterHolidayBody {
    pub date: NaiveDate,
    pub name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterHolidayBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterHoliday {
        holiday_id: Uuid::now_v7().to_string(),
        date: body.date,
        name: body.name,
        requested_at: Utc::now(),
    };

    match state.register_holiday.handle(&actor, command).await {
        Ok(holiday) => (StatusCode::CREATED, Json(holiday)).into_response(),
        Err(error) => error.into_response(),
    }
}
