use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryFilter;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListMineParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ListAllParams {
    pub user_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub is_overtime: Option<bool>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub async fn list_mine(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListMineParams>,
) -> Response {
    match state
        .time_entry_queries
        .list_mine(&actor, params.from, params.to)
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list_all(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListAllParams>,
) -> Response {
    let filter = TimeEntryFilter {
        user_id: params.user_id,
        from: params.from,
        to: params.to,
        is_overtime: params.is_overtime,
    };
    match state
        .time_entry_queries
        .list_all(&actor, &filter, params.page, params.page_size)
        .await
    {
        Ok(page) => Json(page).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
) -> Response {
    match state.time_entry_queries.get(&actor, &time_entry_id).await {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => error.into_response(),
    }
}
