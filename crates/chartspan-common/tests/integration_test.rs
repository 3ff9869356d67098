//! Integration tests for chartspan-common crate.

use chartspan_common::{format_instant, start_of_day, ChartSpanError, Result};
use chrono::NaiveDate;

#[test]
fn test_start_of_day_round_trips_through_formatting() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let instant = start_of_day(date);

    assert_eq!(format_instant(&instant), "2024-06-15 00:00:00");
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn validate_positive(value: i64) -> Result<i64> {
        if value < 0 {
            return Err(ChartSpanError::validation_field(
                "value must be non-negative",
                "value",
            ));
        }
        Ok(value)
    }

    fn pipeline(value: i64) -> Result<i64> {
        let checked = validate_positive(value)?;
        Ok(checked * 2)
    }

    assert_eq!(pipeline(21).unwrap(), 42);
    assert!(pipeline(-1).is_err());
}
