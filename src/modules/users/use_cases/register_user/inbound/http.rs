use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::{Actor, Role};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserBody {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterUser {
        user_id: Uuid::now_v7().to_string(),
        name: body.name,
        email: body.email,
        role: body.role,
        password_hash: body.password_hash,
        requested_at: Utc::now(),
    };

    match state.register_user.handle(&actor, command).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(error) => error.into_response(),
    }
}
