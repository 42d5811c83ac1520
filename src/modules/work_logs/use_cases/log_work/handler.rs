use crate::modules::projects::adapters::outbound::projects::ProjectRepository;
use crate::modules::users::adapters::outbound::users::UserRepository;
use crate::modules::work_logs::adapters::outbound::work_logs::WorkLogRepository;
use crate::modules::work_logs::core::work_log::WorkLog;
use crate::modules::work_logs::use_cases::log_work::command::LogWork;
use crate::modules::work_logs::use_cases::log_work::decide::decide_log_work;
use crate::modules::work_logs::use_cases::log_work::decision::{DecideError, Decision};
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::MissingFields | DecideError::InvalidHours | DecideError::InvalidDate(_) => {
                ApplicationError::Invalid(reason.to_string())
            }
            DecideError::UserNotFound
            | DecideError::ProjectNotFound
            | DecideError::SubtaskNotFound { .. } => ApplicationError::NotFound(reason.to_string()),
        }
    }
}

pub struct LogWorkHandler<TUsers, TProjects, TWorkLogs>
where
    TUsers: UserRepository + Send + Sync + 'static,
    TProjects: ProjectRepository + Send + Sync + 'static,
    TWorkLogs: WorkLogRepository + Send + Sync + 'static,
{
    users: Arc<TUsers>,
    projects: Arc<TProjects>,
    work_logs: Arc<TWorkLogs>,
}

impl<TUsers, TProjects, TWorkLogs> LogWorkHandler<TUsers, TProjects, TWorkLogs>
where
    TUsers: UserRepository + Send + Sync + 'static,
    TProjects: ProjectRepository + Send + Sync + 'static,
    TWorkLogs: WorkLogRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<TUsers>, projects: Arc<TProjects>, work_logs: Arc<TWorkLogs>) -> Self {
        Self {
            users,
            projects,
            work_logs,
        }
    }

    pub async fn handle(&self, command: LogWork) -> Result<WorkLog, ApplicationError> {
        let user = self.users.find_by_id(command.user_id).await?;
        let project = self.projects.find_by_id(command.project_id).await?;

        match decide_log_work(user.as_ref(), project.as_ref(), command) {
            Decision::Accepted { work_log } => {
                let work_log = self.work_logs.insert(work_log).await?;
                tracing::info!(
                    work_log_id = work_log.id,
                    user_id = work_log.user_id,
                    project_id = work_log.project_id,
                    subtask_id = work_log.subtask_id,
                    hours = work_log.hours,
                    "work logged"
                );
                Ok(work_log)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "work log rejected");
                Err(reason.into())
            }
        }
    }
}
