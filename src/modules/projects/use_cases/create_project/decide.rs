use crate::modules::projects::core::project::{NewProject, default_subtasks};
use crate::modules::projects::use_cases::create_project::{
    command::CreateProject,
    decision::{DecideError, Decision},
};
use crate::modules::users::core::user::User;
use crate::shared::core::primitives::parse_date;

pub fn decide_create_project(admin: Option<&User>, command: CreateProject) -> Decision {
    let name = command.name.trim();
    let description = command.description.trim();
    if name.is_empty()
        || description.is_empty()
        || command.start_date.trim().is_empty()
        || command.admin_id <= 0
    {
        return Decision::Rejected {
            reason: DecideError::MissingFields,
        };
    }
    let Ok(start_date) = parse_date(&command.start_date) else {
        return Decision::Rejected {
            reason: DecideError::InvalidStartDate(command.start_date),
        };
    };
    let Some(admin) = admin else {
        return Decision::Rejected {
            reason: DecideError::AdminNotFound,
        };
    };
    if !admin.is_admin {
        return Decision::Rejected {
            reason: DecideError::NotAnAdmin(admin.id),
        };
    }

    Decision::Accepted {
        project: NewProject {
            name: name.to_string(),
            description: description.to_string(),
            admin_id: admin.id,
            start_date,
            subtasks: default_subtasks(),
            created_at: command.created_at,
        },
    }
}
