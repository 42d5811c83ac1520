use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::modules::projects::core::project::Project;
use crate::modules::projects::use_cases::create_project::command::CreateProject;
use crate::modules::projects::use_cases::create_project::decide::decide_create_project;
use crate::modules::projects::use_cases::create_project::decision::{DecideError, Decision};
use crate::modules::users::adapters::outbound::users::UserRepository;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::MissingFields | DecideError::InvalidStartDate(_) => {
                ApplicationError::Invalid(reason.to_string())
            }
            DecideError::AdminNotFound => ApplicationError::NotFound(reason.to_string()),
            DecideError::NotAnAdmin(_) => ApplicationError::Forbidden(reason.to_string()),
        }
    }
}

pub struct CreateProjectHandler<TUsers, TProjects>
where
    TUsers: UserRepository + Send + Sync + 'static,
    TProjects: ProjectRepository + Send + Sync + 'static,
{
    users: Arc<TUsers>,
    projects: Arc<TProjects>,
}

impl<TUsers, TProjects> CreateProjectHandler<TUsers, TProjects>
where
    TUsers: UserRepository + Send + Sync + 'static,
    TProjects: ProjectRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<TUsers>, projects: Arc<TProjects>) -> Self {
        Self { users, projects }
    }

    pub async fn handle(&self, command: CreateProject) -> Result<Project, ApplicationError> {
        let admin = self.users.find_by_id(command.admin_id).await?;

        match decide_create_project(admin.as_ref(), command) {
            Decision::Accepted { project } => {
                let project = self.projects.insert(project).await?;
                tracing::info!(
                    project_id = project.id,
                    admin_id = project.admin_id,
                    subtasks = project.subtasks.len(),
                    "project created"
                );
                Ok(project)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "project creation rejected");
                Err(reason.into())
            }
        }
    }
}

#[cfg(test)]
mod create_project_handler_tests {
    use super::*;
    use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
    use crate::tests::fixtures::seed::{Seeded, seed, seed_database};
    use chrono::Utc;
    use rstest::rstest;

    fn command(admin_id: i64) -> CreateProject {
        CreateProject {
            name: "Intranet".into(),
            description: "Internal portal".into(),
            admin_id,
            start_date: "2024-02-01".into(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_the_project_with_its_subtasks() {
        let Seeded { database, al, .. } = seed_database().await;
        let handler = CreateProjectHandler::new(database.clone(), database.clone());

        let project = handler.handle(command(al.id)).await.expect("handle failed");

        assert_eq!(project.id, 3);
        assert_eq!(project.subtasks.len(), 6);
        assert!(project.subtasks.iter().all(|s| s.project_id == project.id));
        assert_eq!(
            ProjectRepository::find_by_id(&*database, 3).await.unwrap(),
            Some(project)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_not_found_for_an_unknown_admin() {
        let Seeded { database, .. } = seed_database().await;
        let handler = CreateProjectHandler::new(database.clone(), database);
        let result = handler.handle(command(99)).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_forbidden_for_a_member() {
        let Seeded { database, bo, .. } = seed_database().await;
        let handler = CreateProjectHandler::new(database.clone(), database);
        let result = handler.handle(command(bo.id)).await;
        assert!(matches!(result, Err(ApplicationError::Forbidden(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_database_is_offline() {
        let Seeded { database, al, .. } = seed(InMemoryDatabase::new()).await;
        let mut offline = InMemoryDatabase::new();
        offline.toggle_offline();
        let handler = CreateProjectHandler::new(database, Arc::new(offline));
        let result = handler.handle(command(al.id)).await;
        assert!(matches!(result, Err(ApplicationError::Unexpected(_))));
    }
}
