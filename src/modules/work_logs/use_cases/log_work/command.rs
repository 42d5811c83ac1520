use chrono::{DateTime, Utc};

use crate::shared::core::primitives::{ProjectId, SubtaskId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct LogWork {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub subtask_id: SubtaskId,
    pub hours: f64,
    pub description: String,
    /// `YYYY-MM-DD`; the day of `created_at` when absent.
    pub date: Option<String>,
    pub created_at: DateTime<Utc>,
}
