use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::projects::core::project::{Project, Subtask};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSubtask {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub admin_id: i64,
    pub start_date: NaiveDate,
    pub subtasks: Vec<GqlSubtask>,
}

impl From<Subtask> for GqlSubtask {
    fn from(s: Subtask) -> Self {
        Self {
            id: s.id,
            code: s.code,
            name: s.name,
        }
    }
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            admin_id: p.admin_id,
            start_date: p.start_date,
            subtasks: p.subtasks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ProjectsQuery;

#[Object]
impl ProjectsQuery {
    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let projects = state
            .list_projects
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(projects.into_iter().map(Into::into).collect())
    }
}
