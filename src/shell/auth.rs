use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::users::core::ports::UserRepository;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

/// Header carrying the id of the already authenticated caller. Token
/// handling happens in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug)]
pub enum AuthRejection {
    MissingIdentity,
    UnknownUser,
    Unavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, code, detail) = match self {
            AuthRejection::MissingIdentity => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "missing caller identity",
            ),
            AuthRejection::UnknownUser => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "unknown caller",
            ),
            AuthRejection::Unavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "internal storage error",
            ),
        };
        (status, Json(json!({ "error_code": code, "detail": detail }))).into_response()
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthRejection::MissingIdentity)?;

        match state.users.get(user_id).await {
            Ok(Some(user)) => Ok(user.as_actor()),
            Ok(None) => Err(AuthRejection::UnknownUser),
            Err(error) => {
                tracing::error!(%error, "cannot resolve caller");
                Err(AuthRejection::Unavailable)
            }
        }
    }
}
