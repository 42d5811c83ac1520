use crate::modules::projects::core::project::Project;
use crate::modules::users::core::user::User;
use crate::modules::work_logs::core::work_log::NewWorkLog;
use crate::modules::work_logs::use_cases::log_work::{
    command::LogWork,
    decision::{DecideError, Decision},
};
use crate::shared::core::primitives::parse_date;

pub fn decide_log_work(user: Option<&User>, project: Option<&Project>, command: LogWork) -> Decision {
    let description = command.description.trim();
    if command.user_id <= 0
        || command.project_id <= 0
        || command.subtask_id <= 0
        || description.is_empty()
    {
        return Decision::Rejected {
            reason: DecideError::MissingFields,
        };
    }
    if !command.hours.is_finite() || command.hours <= 0.0 {
        return Decision::Rejected {
            reason: DecideError::InvalidHours,
        };
    }
    let date = match command.date.as_deref().map(str::trim) {
        None | Some("") => command.created_at.date_naive(),
        Some(value) => match parse_date(value) {
            Ok(date) => date,
            Err(_) => {
                return Decision::Rejected {
                    reason: DecideError::InvalidDate(value.to_string()),
                };
            }
        },
    };
    if user.is_none() {
        return Decision::Rejected {
            reason: DecideError::UserNotFound,
        };
    }
    let Some(project) = project else {
        return Decision::Rejected {
            reason: DecideError::ProjectNotFound,
        };
    };
    if project.subtask(command.subtask_id).is_none() {
        return Decision::Rejected {
            reason: DecideError::SubtaskNotFound {
                project_id: project.id,
                subtask_id: command.subtask_id,
            },
        };
    }

    Decision::Accepted {
        work_log: NewWorkLog {
            user_id: command.user_id,
            project_id: project.id,
            subtask_id: command.subtask_id,
            date,
            hours: command.hours,
            description: description.to_string(),
            created_at: command.created_at,
        },
    }
}
