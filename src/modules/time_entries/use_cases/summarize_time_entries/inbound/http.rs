use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryFilter;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(filter): Query<TimeEntryFilter>,
) -> Response {
    match state.summarize_time_entries.handle(&actor, &filter).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error.into_response(),
    }
}
