use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Nanoseconds since the Unix epoch
pub type Time = i64;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

pub fn now_ns() -> Time {
    to_ns(Utc::now())
}

pub fn days_from_now_ns(days: i64) -> Time {
    to_ns(Utc::now() + Duration::days(days))
}

fn to_ns(at: DateTime<Utc>) -> Time {
    // Clamped outside the i64 nanosecond range (years 1677 to 2262)
    at.timestamp_nanos_opt()
        .unwrap_or_else(|| at.timestamp().saturating_mul(NANOS_PER_SECOND))
}

pub fn to_datetime(time: Time) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(time)
}

/// Long form date, e.g. "March 5, 2026"
pub fn format_date(time: Time) -> String {
    to_datetime(time).format("%B %-d, %Y").to_string()
}

/// Parse `YYYY-MM-DD` into midnight UTC of that day
pub fn parse_date(input: &str) -> Result<Time> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", input))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("Invalid time of day")?
        .and_utc();
    midnight
        .timestamp_nanos_opt()
        .with_context(|| format!("Date '{}' is outside the supported range", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_date() {
        let ns = parse_date("2026-03-05").unwrap();
        assert_eq!(ns, 1_772_668_800 * NANOS_PER_SECOND);
        assert_eq!(format_date(ns), "March 5, 2026");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("05/03/2026").is_err());
    }

    #[test]
    fn test_parse_date_rejects_out_of_range_years() {
        assert!(parse_date("2300-01-01").is_err());
        assert!(parse_date("1600-01-01").is_err());
        assert!(parse_date("2262-01-01").is_ok());
    }

    #[test]
    fn test_days_from_now_moves_forward() {
        let now = now_ns();
        let later = days_from_now_ns(14);
        let delta_days = (later - now) / (86_400 * NANOS_PER_SECOND);
        assert_eq!(delta_days, 14);
    }
}
