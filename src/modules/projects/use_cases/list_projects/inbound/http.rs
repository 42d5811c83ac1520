use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::infrastructure::http_response::success;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_projects.handle().await {
        Ok(projects) => success(StatusCode::OK, "Projects fetched successfully!", projects),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_projects_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/projects", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_every_project() {
        let (state, _) = make_seeded_state().await;

        let response = app(state)
            .oneshot(Request::get("/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Website", "App"]);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_database_is_offline() {
        let response = app(make_offline_state())
            .oneshot(Request::get("/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
