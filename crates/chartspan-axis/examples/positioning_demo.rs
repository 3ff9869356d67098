//! Example comparing date-only and full-datetime axis positioning
//!
//! Walks through the two scenarios that motivated resolving the axis end
//! from the data: when the last data point falls on the end date its
//! time-of-day becomes the right edge, otherwise the edge is midnight of
//! the end date.

use chartspan_axis::{date_only_fraction, AxisSpan, DateRange};
use chartspan_common::{format_instant, Instant};
use chrono::NaiveDate;

fn instant(y: i32, m: u32, d: u32, h: u32) -> Instant {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn narrate_scenario(title: &str, range: DateRange, points: &[Instant]) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.len()));

    let span = AxisSpan::for_range(&range, points);

    println!("Date range: {} to {}", range.start, range.end);
    println!("Start instant: {}", format_instant(&span.start));
    println!("End instant (resolved): {}", format_instant(&span.end));

    for point in points {
        println!(
            "  {} -> date-only {:.6}, full-datetime {:.6}",
            format_instant(point),
            date_only_fraction(*point, &range),
            span.fraction_of(*point),
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    chartspan_common::init_default_logging().ok();

    println!("=== Time-Axis Positioning Example ===");

    // 1. Last data point falls on the end date: its time becomes the edge,
    //    so the points spread across the axis instead of collapsing to 0.
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    );
    range.validate()?;
    let points = vec![instant(2024, 1, 1, 9), instant(2024, 1, 1, 17)];
    narrate_scenario("Scenario 1: last data point on the end date", range, &points);

    // 2. Last data point before the end date: the edge stays at midnight of
    //    the end date, leaving the trailing empty day visible.
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    );
    range.validate()?;
    let points = vec![instant(2024, 1, 1, 9), instant(2024, 1, 2, 17)];
    narrate_scenario("Scenario 2: last data point before the end date", range, &points);

    Ok(())
}
