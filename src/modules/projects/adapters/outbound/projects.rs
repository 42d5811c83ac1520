use crate::modules::projects::core::project::{NewProject, Project};
use crate::shared::core::primitives::ProjectId;
use async_trait::async_trait;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores the project and its subtasks, assigning identifiers to both.
    async fn insert(&self, project: NewProject) -> anyhow::Result<Project>;
    async fn find_by_id(&self, id: ProjectId) -> anyhow::Result<Option<Project>>;
    async fn list(&self) -> anyhow::Result<Vec<Project>>;
}
