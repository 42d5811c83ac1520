use crate::modules::integrations::adapters::outbound::integrations::IntegrationRepository;
use crate::modules::integrations::core::integration::Integration;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ProjectId;
use std::sync::Arc;

pub struct TrackerStatusHandler<TIntegrations>
where
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    integrations: Arc<TIntegrations>,
}

impl<TIntegrations> TrackerStatusHandler<TIntegrations>
where
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    pub fn new(integrations: Arc<TIntegrations>) -> Self {
        Self { integrations }
    }

    pub async fn handle(&self, project_id: ProjectId) -> Result<Integration, ApplicationError> {
        self.integrations
            .find_by_project(project_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Tracker integration not found".into()))
    }
}
