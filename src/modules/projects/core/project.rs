use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{ProjectId, SubtaskId, UserId};

/// Subtasks every new project starts with, as `(code, name)`.
pub const DEFAULT_SUBTASKS: [(&str, &str); 6] = [
    ("REQ-001", "Requirement Gathering"),
    ("TECH-001", "Technical Design"),
    ("UI-001", "UI Design"),
    ("CODE-001", "Coding"),
    ("TEST-001", "Testing"),
    ("DEP-001", "Deployment"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SubtaskId,
    pub project_id: ProjectId,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub admin_id: UserId,
    pub start_date: NaiveDate,
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn subtask(&self, subtask_id: SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == subtask_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubtask {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub admin_id: UserId,
    pub start_date: NaiveDate,
    pub subtasks: Vec<NewSubtask>,
    pub created_at: DateTime<Utc>,
}

pub fn default_subtasks() -> Vec<NewSubtask> {
    DEFAULT_SUBTASKS
        .iter()
        .map(|(code, name)| NewSubtask {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
}
