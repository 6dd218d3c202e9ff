//! Utilities for date and time formatting
//!
//! Backend dates are `LocalDateTime` without a zone; the UI shows them as
//! DD.MM.YYYY HH:MM and edits them through `<input type="datetime-local">`.

use chrono::NaiveDateTime;

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format a date-time as DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26 -> "15.03.2024 14:02"
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Same as [`format_datetime`], "—" when the value is missing
pub fn format_optional(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Value for a `datetime-local` input
pub fn to_input_value(dt: &NaiveDateTime) -> String {
    dt.format(INPUT_FORMAT).to_string()
}

/// Parse a `datetime-local` input value; browsers may append seconds.
/// Empty input is `Ok(None)`.
pub fn parse_input_value(value: &str) -> Result<Option<NaiveDateTime>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map(Some)
        .map_err(|_| "Неверный формат даты".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&sample()), "15.03.2024 14:02");
        assert_eq!(format_optional(None), "—");
    }

    #[test]
    fn test_input_round_trip_drops_seconds() {
        let value = to_input_value(&sample());
        assert_eq!(value, "2024-03-15T14:02");
        let parsed = parse_input_value(&value).unwrap().unwrap();
        assert_eq!(parsed, sample().with_second(0).unwrap());
    }

    #[test]
    fn test_parse_input_value() {
        assert_eq!(parse_input_value("  "), Ok(None));
        assert!(parse_input_value("2024-03-15T14:02:26").unwrap().is_some());
        assert!(parse_input_value("15.03.2024").is_err());
    }
}
