use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListUsersParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub async fn list(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListUsersParams>,
) -> Response {
    match state
        .user_queries
        .list(&actor, params.page, params.page_size)
        .await
    {
        Ok(page) => Json(page).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Response {
    match state.user_queries.get(&actor, &user_id).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}
