use crate::modules::integrations::adapters::outbound::integrations::IntegrationRepository;
use crate::modules::integrations::core::integration::{Integration, NewIntegration};
use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::ProjectId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectTracker {
    pub project_id: ProjectId,
    pub tracker_account_id: String,
    pub created_at: DateTime<Utc>,
}

pub struct ConnectTrackerHandler<TProjects, TIntegrations>
where
    TProjects: ProjectRepository + Send + Sync + 'static,
    TIntegrations: IntegrationRepository + Send + Sync + 'static,
{
    projects: Arc<TProjects>,
    integrations: Arc<TIntegrations>,
}

impl<TProjects, TIntegrations> ConnectTrackerHandler<TProjects, TIntegrations>
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

    /// Records the tracker account for the project. The account is not
    /// verified against the tracker.
    pub async fn handle(&self, command: ConnectTracker) -> Result<Integration, ApplicationError> {
        let account = command.tracker_account_id.trim();
        if command.project_id <= 0 || account.is_empty() {
            return Err(ApplicationError::Invalid("Missing required fields".into()));
        }
        if self.projects.find_by_id(command.project_id).await?.is_none() {
            return Err(ApplicationError::NotFound("Project not found".into()));
        }
        if self
            .integrations
            .find_by_project(command.project_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::Conflict(
                "Project already has a tracker integration".into(),
            ));
        }

        let integration = self
            .integrations
            .insert(NewIntegration {
                project_id: command.project_id,
                tracker_account_id: account.to_string(),
                created_at: command.created_at,
            })
            .await?;
        tracing::info!(
            integration_id = integration.id,
            project_id = integration.project_id,
            "tracker account connected"
        );
        Ok(integration)
    }
}
