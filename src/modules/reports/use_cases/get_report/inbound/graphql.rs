use async_graphql::{Context, ID, Json, Object, Result as GqlResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::reports::core::report::Report;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReport {
    pub report_id: ID,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub date_range: String,
    pub created_at: DateTime<Utc>,
    pub report_data: Json<serde_json::Value>,
}

impl From<Report> for GqlReport {
    fn from(r: Report) -> Self {
        Self {
            report_id: ID(r.id.to_string()),
            user_id: r.user_id,
            project_id: r.project_id,
            date_range: r.date_range,
            created_at: r.created_at,
            report_data: Json(r.report_data),
        }
    }
}

#[derive(Default)]
pub struct ReportQuery;

#[Object]
impl ReportQuery {
    async fn report(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlReport>> {
        let report_id =
            Uuid::parse_str(&id).map_err(|_| async_graphql::Error::new("Invalid report ID"))?;
        let state = context.data_unchecked::<AppState>();
        match state.get_report.handle(report_id).await {
            Ok(report) => Ok(Some(report.into())),
            Err(ApplicationError::NotFound(_)) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
