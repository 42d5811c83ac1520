use crate::modules::work_logs::core::work_log::NewWorkLog;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Invalid input fields")]
    MissingFields,

    #[error("Hours must be a positive number")]
    InvalidHours,

    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Subtask {subtask_id} does not belong to project {project_id}")]
    SubtaskNotFound { project_id: i64, subtask_id: i64 },
}

pub enum Decision {
    Accepted { work_log: NewWorkLog },
    Rejected { reason: DecideError },
}
