use crate::modules::integrations::adapters::outbound::integrations::IntegrationRepository;
use crate::modules::integrations::core::integration::SyncSummary;
use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ProjectId;
use std::sync::Arc;

pub struct SyncTrackerHandler<TProjects, TIntegrations>
where
    TProjects: ProjectRepository + Send + Sync + 'static,
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    projects: Arc<TProjects>,
    integrations: Arc<TIntegrations>,
}

impl<TProjects, TIntegrations> SyncTrackerHandler<TProjects, TIntegrations>
where
    TProjects: ProjectRepository + Send + Sync + 'static,
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    pub fn new(projects: Arc<TProjects>, integrations: Arc<TIntegrations>) -> Self {
        Self {
            projects,
            integrations,
        }
    }

    /// Checks that the project is connected and reports an empty sync.
    pub async fn handle(&self, project_id: ProjectId) -> Result<SyncSummary, ApplicationError> {
        let project = self.projects.find_by_id(project_id).await?;
        let integration = self.integrations.find_by_project(project_id).await?;
        let (Some(_), Some(integration)) = (project, integration) else {
            return Err(ApplicationError::NotFound(
                "Project or tracker integration not found".into(),
            ));
        };

        // TODO: fetch issues for `tracker_account_id` once a tracker client exists.
        tracing::info!(
            project_id,
            integration_id = integration.id,
            "tracker sync requested, no remote tasks fetched"
        );
        Ok(SyncSummary {
            project_id,
            ..SyncSummary::default()
        })
    }
}
