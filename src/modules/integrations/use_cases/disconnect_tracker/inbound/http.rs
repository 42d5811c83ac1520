use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;

use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisconnectTrackerBody {
    pub project_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DisconnectTrackerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.disconnect_tracker.handle(body.project_id).await {
        Ok(integration) => success(
            StatusCode::OK,
            "Tracker account disconnected successfully!",
            integration,
        ),
        Err(error) => error.into_response(),
    }
}
