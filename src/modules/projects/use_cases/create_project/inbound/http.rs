use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::projects::use_cases::create_project::command::CreateProject;
use crate::shared::infrastructure::http_response::{invalid_body, success};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub admin_id: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub description: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = CreateProject {
        name: body.name,
        description: body.description,
        admin_id: body.admin_id,
        start_date: body.start_date,
        created_at: Utc::now(),
    };

    match state.create_project.handle(command).await {
        Ok(project) => success(StatusCode::CREATED, "Project created successfully!", project),
        Err(error) => error.into_response(),
    }
}
