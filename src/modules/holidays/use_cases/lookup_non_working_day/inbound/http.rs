use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::holidays::core::calendar::is_weekend;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CalendarDayResponse {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_non_working_day: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    _actor: Actor,
    Path(date): Path<String>,
) -> Response {
    let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    match state.holiday_calendar.is_non_working_day(date).await {
        Ok(is_non_working_day) => Json(CalendarDayResponse {
            date,
            is_weekend: is_weekend(date),
            is_non_working_day,
        })
        .into_response(),
        Err(error) => ServiceError::from(error).into_response(),
    }
}
