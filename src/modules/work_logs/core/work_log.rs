use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{DateRange, ProjectId, SubtaskId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub id: i64,
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub subtask_id: SubtaskId,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkLog {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub subtask_id: SubtaskId,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Selection used when building reports. `None` means "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkLogFilter {
    pub user_id: Option<UserId>,
    pub project_id: Option<ProjectId>,
    pub range: DateRange,
}

impl WorkLogFilter {
    pub fn matches(&self, log: &WorkLog) -> bool {
        self.user_id.is_none_or(|id| id == log.user_id)
            && self.project_id.is_none_or(|id| id == log.project_id)
            && self.range.contains(log.date)
    }
}
