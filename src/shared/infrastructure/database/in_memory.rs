// In memory relational store.
//
// Purpose
// - Run the service and its tests without a database server.
//
// Responsibilities
// - Keep one table per entity and hand out sequential identifiers.
// - Answer the joined work-log query used by report generation.
// - Implement every repository port, so one instance can back the whole app.

use crate::modules::integrations::adapters::outbound::integrations::IntegrationRepository;
use crate::modules::integrations::core::integration::{Integration, NewIntegration};
use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::modules::projects::core::project::{NewProject, Project, Subtask};
use crate::modules::reports::adapters::outbound::reports::ReportRepository;
use crate::modules::reports::core::report::Report;
use crate::modules::users::adapters::outbound::users::UserRepository;
use crate::modules::users::core::user::{NewUser, User};
use crate::modules::work_logs::adapters::outbound::work_logs::WorkLogRepository;
use crate::modules::work_logs::core::work_log::{NewWorkLog, WorkLog, WorkLogFilter};
use crate::modules::work_logs::core::work_log_record::WorkLogRecord;
use crate::shared::core::primitives::{ProjectId, UserId};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<Vec<User>>,
    projects: RwLock<Vec<Project>>,
    work_logs: RwLock<Vec<WorkLog>>,
    reports: RwLock<HashMap<Uuid, Report>>,
    integrations: RwLock<BTreeMap<ProjectId, Integration>>,
    subtask_sequence: AtomicI64,
    integration_sequence: AtomicI64,
    is_offline: bool,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Database offline"));
        }
        Ok(())
    }
}

fn next_id(sequence: &AtomicI64) -> i64 {
    sequence.fetch_add(1, Ordering::Relaxed) + 1
}

#[async_trait::async_trait]
impl UserRepository for InMemoryDatabase {
    async fn insert(&self, user: NewUser) -> anyhow::Result<User> {
        self.ensure_online()?;
        let mut users = self.users.write().await;
        let row = User {
            id: users.len() as i64 + 1,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        };
        users.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        self.ensure_online()?;
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait::async_trait]
impl ProjectRepository for InMemoryDatabase {
    async fn insert(&self, project: NewProject) -> anyhow::Result<Project> {
        self.ensure_online()?;
        let mut projects = self.projects.write().await;
        let id = projects.len() as i64 + 1;
        let subtasks = project
            .subtasks
            .into_iter()
            .map(|s| Subtask {
                id: next_id(&self.subtask_sequence),
                project_id: id,
                code: s.code,
                name: s.name,
            })
            .collect();
        let row = Project {
            id,
            name: project.name,
            description: project.description,
            admin_id: project.admin_id,
            start_date: project.start_date,
            subtasks,
            created_at: project.created_at,
            updated_at: project.created_at,
        };
        projects.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: ProjectId) -> anyhow::Result<Option<Project>> {
        self.ensure_online()?;
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Project>> {
        self.ensure_online()?;
        Ok(self.projects.read().await.clone())
    }
}

#[async_trait::async_trait]
impl WorkLogRepository for InMemoryDatabase {
    async fn insert(&self, work_log: NewWorkLog) -> anyhow::Result<WorkLog> {
        self.ensure_online()?;
        let mut work_logs = self.work_logs.write().await;
        let row = WorkLog {
            id: work_logs.len() as i64 + 1,
            user_id: work_log.user_id,
            project_id: work_log.project_id,
            subtask_id: work_log.subtask_id,
            date: work_log.date,
            hours: work_log.hours,
            description: work_log.description,
            created_at: work_log.created_at,
            updated_at: work_log.created_at,
        };
        work_logs.push(row.clone());
        Ok(row)
    }

    async fn query(&self, filter: &WorkLogFilter) -> anyhow::Result<Vec<WorkLogRecord>> {
        self.ensure_online()?;
        let work_logs = self.work_logs.read().await;
        let users = self.users.read().await;
        let projects = self.projects.read().await;

        let mut records = Vec::new();
        for log in work_logs.iter().filter(|log| filter.matches(log)) {
            let user = users.iter().find(|u| u.id == log.user_id);
            let project = projects.iter().find(|p| p.id == log.project_id);
            let subtask = project.and_then(|p| p.subtask(log.subtask_id));
            let (Some(user), Some(project), Some(subtask)) = (user, project, subtask) else {
                return Err(anyhow::anyhow!(
                    "work log {} references a missing user, project or subtask",
                    log.id
                ));
            };
            records.push(WorkLogRecord {
                user_id: user.id,
                user_name: user.name.clone(),
                project_id: project.id,
                project_name: project.name.clone(),
                subtask_id: subtask.id,
                subtask_name: subtask.name.clone(),
                hours: log.hours,
                date: log.date,
            });
        }
        Ok(records)
    }
}

#[async_trait::async_trait]
impl ReportRepository for InMemoryDatabase {
    async fn insert(&self, report: Report) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut reports = self.reports.write().await;
        if reports.contains_key(&report.id) {
            return Err(anyhow::anyhow!("report {} already exists", report.id));
        }
        reports.insert(report.id, report);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Report>> {
        self.ensure_online()?;
        Ok(self.reports.read().await.get(&id).cloned())
    }
}

#[async_trait::async_trait]
impl IntegrationRepository for InMemoryDatabase {
    async fn insert(&self, integration: NewIntegration) -> anyhow::Result<Integration> {
        self.ensure_online()?;
        let mut integrations = self.integrations.write().await;
        if integrations.contains_key(&integration.project_id) {
            return Err(anyhow::anyhow!(
                "project {} already has an integration",
                integration.project_id
            ));
        }
        let row = Integration {
            id: next_id(&self.integration_sequence),
            project_id: integration.project_id,
            tracker_account_id: integration.tracker_account_id,
            created_at: integration.created_at,
            updated_at: integration.created_at,
        };
        integrations.insert(row.project_id, row.clone());
        Ok(row)
    }

    async fn find_by_project(&self, project_id: ProjectId) -> anyhow::Result<Option<Integration>> {
        self.ensure_online()?;
        Ok(self.integrations.read().await.get(&project_id).cloned())
    }

    async fn delete_by_project(
        &self,
        project_id: ProjectId,
    ) -> anyhow::Result<Option<Integration>> {
        self.ensure_online()?;
        Ok(self.integrations.write().await.remove(&project_id))
    }
}
