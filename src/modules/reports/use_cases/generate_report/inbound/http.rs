use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportBody {
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    #[serde(default)]
    pub date_range: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<GenerateReportBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = GenerateReport {
        report_id: Uuid::now_v7(),
        user_id: body.user_id,
        project_id: body.project_id,
        date_range: body.date_range,
        created_at: Utc::now(),
    };

    match state.generate_report.handle(command).await {
        Ok(report) => success(StatusCode::CREATED, "Report generated successfully!", report),
        Err(error) => error.into_response(),
    }
}
