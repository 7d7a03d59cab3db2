use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListHolidaysParams {
    pub year: Option<i32>,
}

pub async fn handle(
    State(state): State<AppState>,
    _actor: Actor,
    Query(params): Query<ListHolidaysParams>,
) -> Response {
    match state.holiday_queries.list(params.year).await {
        Ok(holidays) => Json(holidays).into_response(),
        Err(error) => error.into_response(),
    }
}
