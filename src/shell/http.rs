use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::integrations::use_cases::connect_tracker::inbound::http as connect_tracker_http;
use crate::modules::integrations::use_cases::disconnect_tracker::inbound::http as disconnect_tracker_http;
use crate::modules::integrations::use_cases::sync_tracker::inbound::http as sync_tracker_http;
use crate::modules::integrations::use_cases::tracker_status::inbound::http as tracker_status_http;
use crate::modules::projects::use_cases::create_project::inbound::http as create_project_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::reports::use_cases::generate_report::inbound::http as generate_report_http;
use crate::modules::reports::use_cases::get_report::inbound::http as get_report_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_user_http;
use crate::modules::work_logs::use_cases::log_work::inbound::http as log_work_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/users", post(register_user_http::handle))
        .route(
            "/projects",
            post(create_project_http::handle).get(list_projects_http::handle),
        )
        .route("/work-logs", post(log_work_http::handle))
        .route("/reports/generate", post(generate_report_http::handle))
        .route("/reports/{report_id}", get(get_report_http::handle))
        .route("/integrations/connect", post(connect_tracker_http::handle))
        .route(
            "/integrations/disconnect",
            post(disconnect_tracker_http::handle),
        )
        .route("/integrations/sync", post(sync_tracker_http::handle))
        .route(
            "/integrations/{project_id}",
            get(tracker_status_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::handle))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
