use crate::modules::projects::core::project::NewProject;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid start date `{0}`, expected YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error("Admin not found")]
    AdminNotFound,

    #[error("User {0} is not an administrator")]
    NotAnAdmin(i64),
}

pub enum Decision {
    Accepted { project: NewProject },
    Rejected { reason: DecideError },
}
