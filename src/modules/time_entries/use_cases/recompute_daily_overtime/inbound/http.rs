use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, actor: Actor) -> Response {
    match state.recompute_all.handle(&actor).await {
        Ok(report) => Json(report).into_response(),
        Err(error) => error.into_response(),
    }
}
