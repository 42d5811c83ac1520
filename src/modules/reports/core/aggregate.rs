use indexmap::IndexMap;

use crate::modules::reports::core::report::{ProjectSummary, SubtaskSummary, UserReport};
use crate::modules::work_logs::core::work_log_record::WorkLogRecord;
use crate::shared::core::primitives::{ProjectId, SubtaskId, UserId};

struct ProjectAccumulator {
    project_name: String,
    total_hours: f64,
    subtasks: IndexMap<SubtaskId, SubtaskSummary>,
}

struct UserAccumulator {
    user_name: String,
    projects: IndexMap<ProjectId, ProjectAccumulator>,
}

/// Pivots flat work-log records into per user, per project, per subtask totals.
///
/// Users, projects and subtasks keep the order in which they first appear in
/// `records`. Display names come from the first record seen for an id; later
/// records with a different name for the same id do not rename the entry.
///
/// Hours are summed as given. Rejecting zero or negative hours is left to the
/// callers that accept work logs.
pub fn aggregate(records: &[WorkLogRecord]) -> Vec<UserReport> {
    let mut users: IndexMap<UserId, UserAccumulator> = IndexMap::new();

    for record in records {
        let user = users
            .entry(record.user_id)
            .or_insert_with(|| UserAccumulator {
                user_name: record.user_name.clone(),
                projects: IndexMap::new(),
            });

        let project = user
            .projects
            .entry(record.project_id)
            .or_insert_with(|| ProjectAccumulator {
                project_name: record.project_name.clone(),
                total_hours: 0.0,
                subtasks: IndexMap::new(),
            });
        project.total_hours += record.hours;

        let subtask = project
            .subtasks
            .entry(record.subtask_id)
            .or_insert_with(|| SubtaskSummary {
                subtask_id: record.subtask_id,
                subtask_name: record.subtask_name.clone(),
                hours: 0.0,
            });
        subtask.hours += record.hours;
    }

    users
        .into_iter()
        .map(|(user_id, user)| UserReport {
            user_id,
            user_name: user.user_name,
            projects: user
                .projects
                .into_iter()
                .map(|(project_id, project)| ProjectSummary {
                    project_id,
                    project_name: project.project_name,
                    total_hours: project.total_hours,
                    subtasks: project.subtasks.into_values().collect(),
                })
                .collect(),
        })
        .collect()
}
