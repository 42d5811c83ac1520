use crate::modules::integrations::adapters::outbound::integrations::IntegrationRepository;
use crate::modules::integrations::core::integration::Integration;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ProjectId;
use std::sync::Arc;

pub struct DisconnectTrackerHandler<TIntegrations>
where
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    integrations: Arc<TIntegrations>,
}

impl<TIntegrations> DisconnectTrackerHandler<TIntegrations>
where
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    pub fn new(integrations: Arc<TIntegrations>) -> Self {
        Self { integrations }
    }

    /// Removes the project's integration and returns the deleted row.
    pub async fn handle(&self, project_id: ProjectId) -> Result<Integration, ApplicationError> {
        let integration = self
            .integrations
            .delete_by_project(project_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound(
                    "Tracker integration not found for the specified project".into(),
                )
            })?;
        tracing::info!(
            integration_id = integration.id,
            project_id,
            "tracker account disconnected"
        );
        Ok(integration)
    }
}
