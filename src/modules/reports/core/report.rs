use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::core::primitives::{ProjectId, SubtaskId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskSummary {
    pub subtask_id: SubtaskId,
    pub subtask_name: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub project_name: String,
    pub total_hours: f64,
    pub subtasks: Vec<SubtaskSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub user_id: UserId,
    pub user_name: String,
    pub projects: Vec<ProjectSummary>,
}

/// A persisted report. `report_data` is kept as the JSON written at
/// generation time and handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub user_id: Option<UserId>,
    pub project_id: Option<ProjectId>,
    pub date_range: String,
    pub report_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
