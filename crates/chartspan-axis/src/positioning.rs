//! Timestamp-to-fraction positioning along a plotted time axis

use crate::DateRange;
use chartspan_common::{start_of_day, Instant};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolve the effective right edge of a plotted range.
///
/// If the chronologically last data point falls on the requested end date,
/// its time-of-day becomes the edge, so the axis ends exactly where the data
/// does. Otherwise (or when there is no data) the edge is midnight of the
/// end date.
pub fn resolve_end_instant(end_date: NaiveDate, data_points: &[Instant]) -> Instant {
    let Some(last) = data_points.iter().max() else {
        tracing::debug!(%end_date, "no data points, using start of end date");
        return start_of_day(end_date);
    };

    if last.date() == end_date {
        tracing::debug!(%end_date, last = %last, "last data point on end date, using its time");
        *last
    } else {
        tracing::debug!(%end_date, last = %last, "last data point before end date, using start of end date");
        start_of_day(end_date)
    }
}

/// A resolved start/end instant pair positioning timestamps along a time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpan {
    pub start: Instant,
    pub end: Instant,
}

impl AxisSpan {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Build a span for a date range from the observed data points.
    ///
    /// The left edge is midnight of the start date; the right edge is the
    /// effective end instant resolved via [`resolve_end_instant`].
    pub fn for_range(range: &DateRange, data_points: &[Instant]) -> Self {
        Self {
            start: range.start_instant(),
            end: resolve_end_instant(range.end, data_points),
        }
    }

    /// Fractional position of a timestamp within the span.
    ///
    /// Returns `(timestamp - start) / (end - start)` measured in elapsed
    /// time, or 0 when the span is empty. Timestamps outside the span yield
    /// fractions outside [0, 1]; no clamping is performed.
    pub fn fraction_of(&self, timestamp: Instant) -> f64 {
        let total_ms = (self.end - self.start).num_milliseconds();
        if total_ms <= 0 {
            return 0.0;
        }
        let elapsed_ms = (timestamp - self.start).num_milliseconds();
        elapsed_ms as f64 / total_ms as f64
    }

    /// Fractional positions for a whole series of timestamps
    pub fn fractions_of(&self, timestamps: &[Instant]) -> Vec<f64> {
        timestamps.iter().map(|ts| self.fraction_of(*ts)).collect()
    }
}

/// Date-granularity positioning, kept for comparison with [`AxisSpan`].
///
/// Ignores time-of-day entirely: whole days elapsed over whole days spanned,
/// or 0 when the range covers a single day. This is what made points plotted
/// on the same day collapse onto one x coordinate.
pub fn date_only_fraction(timestamp: Instant, range: &DateRange) -> f64 {
    let total_days = range.num_days();
    if total_days <= 0 {
        return 0.0;
    }
    let days_from_start = (timestamp.date() - range.start).num_days();
    days_from_start as f64 / total_days as f64
}
