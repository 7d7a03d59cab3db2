use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::core::errors::ServiceError;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            e if e.is_validation() => StatusCode::BAD_REQUEST,
            e if e.is_conflict() => StatusCode::CONFLICT,
            ServiceError::AuthorizationDenied(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ServiceError::Database(error) => {
                tracing::error!(%error, "store failure while serving request");
                "internal storage error".to_string()
            }
            other => other.to_string(),
        };
        let body = json!({ "error_code": self.error_code(), "detail": detail });
        (status, Json(body)).into_response()
    }
}
