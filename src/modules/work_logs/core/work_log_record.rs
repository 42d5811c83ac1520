use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{ProjectId, SubtaskId, UserId};

/// A work log joined with the display names of its user, project and subtask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogRecord {
    pub user_id: UserId,
    pub user_name: String,
    pub project_id: ProjectId,
    pub project_name: String,
    pub subtask_id: SubtaskId,
    pub subtask_name: String,
    pub hours: f64,
    pub date: NaiveDate,
}
