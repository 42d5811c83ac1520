use crate::modules::integrations::core::integration::{Integration, NewIntegration};
use crate::shared::core::primitives::ProjectId;
use async_trait::async_trait;

#[async_trait]
pub trait IntegrationRepository: Send + Sync {
    async fn insert(&self, integration: NewIntegration) -> anyhow::Result<Integration>;
    async fn find_by_project(&self, project_id: ProjectId) -> anyhow::Result<Option<Integration>>;
    async fn delete_by_project(&self, project_id: ProjectId)
    -> anyhow::Result<Option<Integration>>;
}
