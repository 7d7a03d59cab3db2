use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::leave_requests::core::leave_request::LeaveStatus;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LeaveRequestParams {
    pub status: Option<LeaveStatus>,
    pub user_id: Option<String>,
}

pub async fn list_mine(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<LeaveRequestParams>,
) -> Response {
    match state.leave_request_queries.list_mine(&actor, params.status).await {
        Ok(requests) => Json(requests).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list_all(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<LeaveRequestParams>,
) -> Response {
    match state
        .leave_request_queries
        .list_all(&actor, params.status, params.user_id.as_deref())
        .await
    {
        Ok(requests) => Json(requests).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(request_id): Path<String>,
) -> Response {
    match state.leave_request_queries.get(&actor, &request_id).await {
        Ok(request) => Json(request).into_response(),
        Err(error) => error.into_response(),
    }
}
