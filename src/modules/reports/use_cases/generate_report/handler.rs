use crate::modules::reports::adapters::outbound::reports::ReportRepository;
use crate::modules::reports::core::aggregate::aggregate;
use crate::modules::reports::core::report::{Report, UserReport};
use crate::modules::reports::use_cases::generate_report::command::GenerateReport;
use crate::modules::work_logs::adapters::outbound::work_logs::WorkLogRepository;
use crate::modules::work_logs::core::work_log::WorkLogFilter;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::DateRange;
use anyhow::Context;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub report_id: Uuid,
    pub report_data: Vec<UserReport>,
}

pub struct GenerateReportHandler<TWorkLogs, TReports>
where
    TWorkLogs: WorkLogRepository + Send + Sync + 'static,
    TReports: ReportRepository + Send + Sync + 'static,
{
    work_logs: Arc<TWorkLogs>,
    reports: Arc<TReports>,
}

impl<TWorkLogs, TReports> GenerateReportHandler<TWorkLogs, TReports>
where
    TWorkLogs: WorkLogRepository + Send + Sync + 'static,
    TReports: ReportRepository + Send + Sync + 'static,
{
    pub fn new(work_logs: Arc<TWorkLogs>, reports: Arc<TReports>) -> Self {
        Self { work_logs, reports }
    }

    pub async fn handle(&self, command: GenerateReport) -> Result<GeneratedReport, ApplicationError> {
        let range = command
            .date_range
            .parse::<DateRange>()
            .map_err(|e| ApplicationError::Invalid(format!("Invalid date range: {e}")))?;

        let filter = WorkLogFilter {
            user_id: command.user_id,
            project_id: command.project_id,
            range,
        };
        let records = self.work_logs.query(&filter).await?;
        let report_data = aggregate(&records);

        let report = Report {
            id: command.report_id,
            user_id: command.user_id,
            project_id: command.project_id,
            date_range: range.to_string(),
            report_data: serde_json::to_value(&report_data)
                .context("failed to serialize report data")?,
            created_at: command.created_at,
        };
        self.reports.insert(report).await?;

        tracing::info!(
            report_id = %command.report_id,
            date_range = %range,
            user_id = ?command.user_id,
            project_id = ?command.project_id,
            records = records.len(),
            users = report_data.len(),
            "report generated"
        );

        Ok(GeneratedReport {
            report_id: command.report_id,
            report_data,
        })
    }
}

#[cfg(test)]
mod generate_report_handler_tests {
    use super::*;
    use crate::shared::infrastructure::database::in_memory::InMemoryDatabase;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> GenerateReport {
        GenerateReport {
            report_id: Uuid::now_v7(),
            user_id: None,
            project_id: None,
            date_range: "2024-01-01 - 2024-01-31".into(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_an_empty_report_when_nothing_was_logged(command: GenerateReport) {
        let database = Arc::new(InMemoryDatabase::new());
        let handler = GenerateReportHandler::new(database.clone(), database.clone());

        let generated = handler.handle(command.clone()).await.expect("handle failed");

        assert!(generated.report_data.is_empty());
        let stored = ReportRepository::find_by_id(&*database, command.report_id)
            .await
            .unwrap()
            .expect("report not stored");
        assert_eq!(stored.report_data, serde_json::json!([]));
        assert_eq!(stored.date_range, "2024-01-01 - 2024-01-31");
    }

    #[rstest]
    #[case("")]
    #[case("2024-01-01")]
    #[case("2024-02-01 - 2024-01-01")]
    #[tokio::test]
    async fn it_should_reject_an_invalid_date_range(command: GenerateReport, #[case] date_range: &str) {
        let database = Arc::new(InMemoryDatabase::new());
        let handler = GenerateReportHandler::new(database.clone(), database.clone());

        let result = handler
            .handle(GenerateReport {
                date_range: date_range.into(),
                ..command.clone()
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::Invalid(_))));
        assert!(
            ReportRepository::find_by_id(&*database, command.report_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_report_store_is_offline(command: GenerateReport) {
        let mut reports = InMemoryDatabase::new();
        reports.toggle_offline();
        let handler = GenerateReportHandler::new(Arc::new(InMemoryDatabase::new()), Arc::new(reports));

        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::Unexpected(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_same_report_id_is_used_twice(command: GenerateReport) {
        let database = Arc::new(InMemoryDatabase::new());
        let handler = GenerateReportHandler::new(database.clone(), database);

        handler.handle(command.clone()).await.expect("first handle failed");
        let result = handler.handle(command).await;

        assert!(matches!(result, Err(ApplicationError::Unexpected(_))));
    }
}
