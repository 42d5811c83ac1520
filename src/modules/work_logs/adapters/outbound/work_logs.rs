use crate::modules::work_logs::core::work_log::{NewWorkLog, WorkLog, WorkLogFilter};
use crate::modules::work_logs::core::work_log_record::WorkLogRecord;
use async_trait::async_trait;

#[async_trait]
pub trait WorkLogRepository: Send + Sync {
    async fn insert(&self, work_log: NewWorkLog) -> anyhow::Result<WorkLog>;

    /// Matching logs joined with display names, in the order they were logged.
    async fn query(&self, filter: &WorkLogFilter) -> anyhow::Result<Vec<WorkLogRecord>>;
}
