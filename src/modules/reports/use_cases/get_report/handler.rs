use crate::modules::reports::adapters::outbound::reports::ReportRepository;
use crate::modules::reports::core::report::Report;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetReportHandler<TReports>
where
    TReports: ReportRepository + Send + Sync + 'static,
{
    reports: Arc<TReports>,
}

impl<TReports> GetReportHandler<TReports>
where
    TReports: ReportRepository + Send + Sync + 'static,
{
    pub fn new(reports: Arc<TReports>) -> Self {
        Self { reports }
    }

    /// Returns the stored report as written; nothing is recomputed.
    pub async fn handle(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
        self.reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Report not found".into()))
    }
}
