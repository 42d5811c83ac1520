use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = RegisterUser {
        name: body.name,
        email: body.email,
        is_admin: body.is_admin,
        created_at: Utc::now(),
    };

    match state.register_user.handle(command).await {
        Ok(user) => success(StatusCode::CREATED, "User registered successfully!", user),
        Err(error) => error.into_response(),
    }
}
