use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::reports::core::report::Report;
use crate::shared::infrastructure::http_response::{failure, success};
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date_range: String,
    pub created_at: DateTime<Utc>,
    pub report_data: serde_json::Value,
}

impl From<Report> for ReportResponse {
    fn from(r: Report) -> Self {
        Self {
            report_id: r.id,
            user_id: r.user_id,
            project_id: r.project_id,
            date_range: r.date_range,
            created_at: r.created_at,
            report_data: r.report_data,
        }
    }
}

pub async fn handle(State(state): State<AppState>, Path(report_id): Path<String>) -> Response {
    let Ok(report_id) = Uuid::parse_str(&report_id) else {
        return failure(StatusCode::BAD_REQUEST, "Invalid report ID");
    };

    match state.get_report.handle(report_id).await {
        Ok(report) => success(
            StatusCode::OK,
            "Report fetched successfully!",
            ReportResponse::from(report),
        ),
        Err(error) => error.into_response(),
    }
}
