use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::reports::core::report::{ProjectSummary, SubtaskSummary, UserReport};
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::modules::reports::use_cases::generate_report::handler::GeneratedReport;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSubtaskSummary {
    pub subtask_id: i64,
    pub subtask_name: String,
    pub hours: f64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectSummary {
    pub project_id: i64,
    pub project_name: String,
    pub total_hours: f64,
    pub subtasks: Vec<GqlSubtaskSummary>,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUserReport {
    pub user_id: i64,
    pub user_name: String,
    pub projects: Vec<GqlProjectSummary>,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlGeneratedReport {
    pub report_id: ID,
    pub report_data: Vec<GqlUserReport>,
}

impl From<SubtaskSummary> for GqlSubtaskSummary {
    fn from(s: SubtaskSummary) -> Self {
        Self {
            subtask_id: s.subtask_id,
            subtask_name: s.subtask_name,
            hours: s.hours,
        }
    }
}

impl From<ProjectSummary> for GqlProjectSummary {
    fn from(p: ProjectSummary) -> Self {
        Self {
            project_id: p.project_id,
            project_name: p.project_name,
            total_hours: p.total_hours,
            subtasks: p.subtasks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserReport> for GqlUserReport {
    fn from(u: UserReport) -> Self {
        Self {
            user_id: u.user_id,
            user_name: u.user_name,
            projects: u.projects.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<GeneratedReport> for GqlGeneratedReport {
    fn from(r: GeneratedReport) -> Self {
        Self {
            report_id: ID(r.report_id.to_string()),
            report_data: r.report_data.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_report(
        &self,
        context: &Context<'_>,
        date_range: String,
        user_id: Option<i64>,
        project_id: Option<i64>,
    ) -> GqlResult<GqlGeneratedReport> {
        let state = context.data_unchecked::<AppState>();

        let command = GenerateReport {
            report_id: Uuid::now_v7(),
            user_id,
            project_id,
            date_range,
            created_at: Utc::now(),
        };

        let generated = state
            .generate_report
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(generated.into())
    }
}
