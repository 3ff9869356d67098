//! Calendar date ranges for plotted time axes

use chartspan_common::{start_of_day, ChartSpanError, Instant, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pair of calendar dates bounding a plotted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering the last `days` days up to today
    pub fn last_days(days: u32) -> Self {
        let end = chrono::Utc::now().date_naive();
        let start = end - chrono::Duration::days(days as i64);
        Self { start, end }
    }

    /// Validate that the range is not inverted
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(ChartSpanError::validation_field(
                "Start date cannot be after end date",
                "start",
            ));
        }
        Ok(())
    }

    /// The instant at which the range begins (midnight of the start date)
    pub fn start_instant(&self) -> Instant {
        start_of_day(self.start)
    }

    /// Number of whole days spanned by the range
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
