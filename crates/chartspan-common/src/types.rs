//! Common types used across the chartspan library

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A specific point in time with date and time-of-day components.
///
/// Instants are totally ordered by chronological value and subtraction
/// yields a `chrono::Duration`.
pub type Instant = NaiveDateTime;

/// The instant at which a calendar date begins (time-of-day zero).
pub fn start_of_day(date: NaiveDate) -> Instant {
    date.and_time(NaiveTime::MIN)
}

/// Format an instant for display
pub fn format_instant(instant: &Instant) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let instant = start_of_day(date);

        assert_eq!(instant.date(), date);
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 0);
        assert_eq!(instant.second(), 0);
    }

    #[test]
    fn test_format_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        assert_eq!(format_instant(&instant), "2024-01-01 09:30:00");
    }
}
