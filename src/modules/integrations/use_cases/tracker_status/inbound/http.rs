use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::infrastructure::http_response::{failure, success};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(project_id): Path<String>) -> Response {
    let Ok(project_id) = project_id.parse::<i64>() else {
        return failure(StatusCode::BAD_REQUEST, "Invalid project ID");
    };

    match state.tracker_status.handle(project_id).await {
        Ok(integration) => success(
            StatusCode::OK,
            "Tracker integration status fetched successfully!",
            integration,
        ),
        Err(error) => error.into_response(),
    }
}
