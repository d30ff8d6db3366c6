//! Formatting Helpers
//!
//! Pure display formatting for dates and scores. Wire timestamps are
//! RFC 3339; the portal displays them in day.month.year order.

use chrono::{DateTime, NaiveDate, Utc};

/// Render a date for table cells, `-` when absent.
pub fn fmt_date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Render a timestamp with time of day.
pub fn fmt_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Value for an `<input type="date">`, empty when unset.
pub fn date_input_value(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Parse an `<input type="date">` value into a UTC midnight timestamp.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Render a score with one decimal place, dropping a trailing `.0`.
pub fn fmt_score(value: f64) -> String {
    let rendered = format!("{value:.1}");
    rendered
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(rendered)
}

/// Render an optional numeric field, `-` when absent.
pub fn fmt_opt_score(value: Option<f64>) -> String {
    value.map(fmt_score).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_round_trip() {
        let ts = parse_date_input("2024-03-07").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap());
        assert_eq!(date_input_value(Some(&ts)), "2024-03-07");
        assert_eq!(fmt_date(Some(&ts)), "07.03.2024");
    }

    #[test]
    fn blank_date_input_is_none() {
        assert!(parse_date_input("").is_none());
        assert!(parse_date_input("  ").is_none());
        assert!(parse_date_input("07.03.2024").is_none());
    }

    #[test]
    fn missing_date_renders_dash() {
        assert_eq!(fmt_date(None), "-");
    }

    #[test]
    fn scores_drop_trailing_zero() {
        assert_eq!(fmt_score(12.0), "12");
        assert_eq!(fmt_score(12.5), "12.5");
        assert_eq!(fmt_score(12.25), "12.2");
        assert_eq!(fmt_opt_score(None), "-");
    }
}
