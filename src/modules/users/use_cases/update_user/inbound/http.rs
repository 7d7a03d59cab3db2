use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::users::use_cases::update_user::command::UpdateUser;
use crate::shared::core::actor::{Actor, Role};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
    body: Result<Json<UpdateUserBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateUser {
        user_id,
        name: body.name,
        email: body.email,
        role: body.role,
        password_hash: body.password_hash,
        requested_at: Utc::now(),
    };

    match state.update_user.handle(&actor, command).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}
