//! Formatting helpers for durations and publication dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render whole seconds as `HH:MM:SS`.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Short publication date, e.g. `22 Jan 21`.
pub fn format_published_short(date: NaiveDate) -> String {
    date.format("%-d %b %y").to_string()
}

/// Header date, e.g. `Fri, 22 January`.
pub fn format_today(date: NaiveDate) -> String {
    date.format("%a, %-d %B").to_string()
}

/// Accepts RFC 3339 timestamps as well as the space-separated and date-only
/// forms JSON backends commonly emit.
pub fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(45), "00:00:45");
        assert_eq!(format_duration(3981), "01:06:21");
        assert_eq!(format_duration(36_000), "10:00:00");
    }

    #[test]
    fn published_dates_in_all_backend_shapes() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();
        for raw in [
            "2021-01-22 19:15:48",
            "2021-01-22T19:15:48",
            "2021-01-22T19:15:48Z",
            "2021-01-22T19:15:48+00:00",
            " 2021-01-22 ",
        ] {
            assert_eq!(parse_published_at(raw).map(|d| d.date()), Some(expected), "{raw}");
        }
        assert!(parse_published_at("22/01/2021").is_none());
    }

    #[test]
    fn date_labels() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        assert_eq!(format_published_short(date), "2 Jan 21");
        assert_eq!(format_today(date), "Sat, 2 January");
    }
}
