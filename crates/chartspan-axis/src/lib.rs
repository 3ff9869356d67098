//! Time-axis positioning for chart generation.
//!
//! Maps timestamps to normalized fractional coordinates (0.0 at the start of
//! a plotted range, 1.0 at its end) so that chart renderers can lay data
//! points out along a time axis. The right edge of the range is resolved from
//! the observed data: if the last data point falls on the requested end date,
//! its time-of-day becomes the edge instead of midnight.

pub mod positioning;
pub mod range;

pub use positioning::{date_only_fraction, resolve_end_instant, AxisSpan};
pub use range::DateRange;
