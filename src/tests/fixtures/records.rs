use crate::modules::work_logs::core::work_log_record::WorkLogRecord;
use chrono::NaiveDate;

pub struct WorkLogRecordBuilder {
    inner: WorkLogRecord,
}

impl Default for WorkLogRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkLogRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: WorkLogRecord {
                user_id: 1,
                user_name: "Al".to_string(),
                project_id: 10,
                project_name: "Website".to_string(),
                subtask_id: 100,
                subtask_name: "Design".to_string(),
                hours: 1.0,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            },
        }
    }

    pub fn user(mut self, id: i64, name: impl Into<String>) -> Self {
        self.inner.user_id = id;
        self.inner.user_name = name.into();
        self
    }

    pub fn project(mut self, id: i64, name: impl Into<String>) -> Self {
        self.inner.project_id = id;
        self.inner.project_name = name.into();
        self
    }

    pub fn subtask(mut self, id: i64, name: impl Into<String>) -> Self {
        self.inner.subtask_id = id;
        self.inner.subtask_name = name.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn build(self) -> WorkLogRecord {
        self.inner
    }
}
