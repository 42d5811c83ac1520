use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type UserId = i64;
pub type ProjectId = i64;
pub type SubtaskId = i64;

const DATE_FORMAT: &str = "%Y-%m-%d";
const RANGE_SEPARATOR: &str = " - ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("date range is empty")]
    Empty,

    #[error("date range must look like `YYYY-MM-DD - YYYY-MM-DD`")]
    MissingSeparator,

    #[error("invalid date `{0}`")]
    InvalidDate(String),

    #[error("range starts on {start} which is after its end {end}")]
    Reversed { start: NaiveDate, end: NaiveDate },
}

/// Inclusive calendar date range, written as `YYYY-MM-DD - YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl FromStr for DateRange {
    type Err = DateRangeError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.is_empty() {
            return Err(DateRangeError::Empty);
        }
        let (start, end) = label
            .split_once(RANGE_SEPARATOR)
            .ok_or(DateRangeError::MissingSeparator)?;
        Self::new(parse_date(start)?, parse_date(end)?)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{RANGE_SEPARATOR}{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}
