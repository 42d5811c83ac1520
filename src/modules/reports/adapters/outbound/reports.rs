use crate::modules::reports::core::report::Report;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn insert(&self, report: Report) -> anyhow::Result<()>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Report>>;
}
