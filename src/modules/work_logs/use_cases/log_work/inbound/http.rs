use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::work_logs::use_cases::log_work::command::LogWork;
use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkBody {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub subtask_id: i64,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub description: String,
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LogWorkBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = LogWork {
        user_id: body.user_id,
        project_id: body.project_id,
        subtask_id: body.subtask_id,
        hours: body.hours,
        description: body.description,
        date: body.date,
        created_at: Utc::now(),
    };

    match state.log_work.handle(command).await {
        Ok(work_log) => success(StatusCode::CREATED, "Work log created successfully!", work_log),
        Err(error) => error.into_response(),
    }
}
