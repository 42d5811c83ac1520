use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::modules::projects::core::project::Project;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct ListProjectsHandler<TProjects>
where
    TProjects: ProjectRepository + Send + Sync + 'static,
{
    projects: Arc<TProjects>,
}

impl<TProjects> ListProjectsHandler<TProjects>
where
    TProjects: ProjectRepository + Send + Sync + 'static,
{
    pub fn new(projects: Arc<TProjects>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self) -> Result<Vec<Project>, ApplicationError> {
        Ok(self.projects.list().await?)
    }
}
