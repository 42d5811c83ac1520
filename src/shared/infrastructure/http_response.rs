// JSON envelope shared by every HTTP inbound adapter.
//
// Every response body is `{ "success": bool, "message": string, "data"?: T }`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    (
        status,
        Json(ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }),
    )
        .into_response()
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            message: message.into(),
            data: None,
        }),
    )
        .into_response()
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected request body");
    failure(StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body")
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Invalid(message) => failure(StatusCode::BAD_REQUEST, message),
            ApplicationError::NotFound(message) => failure(StatusCode::NOT_FOUND, message),
            ApplicationError::Forbidden(message) => failure(StatusCode::FORBIDDEN, message),
            ApplicationError::Conflict(message) => failure(StatusCode::CONFLICT, message),
            ApplicationError::Unexpected(error) => {
                tracing::error!(error = %error, "unexpected failure while handling request");
                failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
