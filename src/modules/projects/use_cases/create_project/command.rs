use chrono::{DateTime, Utc};

use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub admin_id: UserId,
    pub start_date: String,
    pub created_at: DateTime<Utc>,
}
