use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::integrations::use_cases::connect_tracker::handler::ConnectTracker;
use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectTrackerBody {
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub tracker_account_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ConnectTrackerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = ConnectTracker {
        project_id: body.project_id,
        tracker_account_id: body.tracker_account_id,
        created_at: Utc::now(),
    };

    match state.connect_tracker.handle(command).await {
        Ok(integration) => success(
            StatusCode::CREATED,
            "Tracker account connected successfully!",
            integration,
        ),
        Err(error) => error.into_response(),
    }
}
