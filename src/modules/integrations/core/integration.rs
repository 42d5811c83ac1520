use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::ProjectId;

/// Link between a project and an account on the external issue tracker.
/// A project has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: i64,
    pub project_id: ProjectId,
    pub tracker_account_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIntegration {
    pub project_id: ProjectId,
    pub tracker_account_id: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a sync run. No tracker API is called yet, so both counts stay zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub project_id: ProjectId,
    pub imported_tasks: u32,
    pub updated_tasks: u32,
}
