use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::core::primitives::{ProjectId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub report_id: Uuid,
    pub user_id: Option<UserId>,
    pub project_id: Option<ProjectId>,
    /// `YYYY-MM-DD - YYYY-MM-DD`, both ends inclusive.
    pub date_range: String,
    pub created_at: DateTime<Utc>,
}
