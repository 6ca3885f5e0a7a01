//! Display formatting helpers for API values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for absent or unparseable values.
const PLACEHOLDER: &str = "-";

/// Render a datetime string as `YYYY-MM-DD HH:MM:SS`.
///
/// Absent, empty, or unparseable input degrades to "-"; never panics.
pub fn format_date_time(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return PLACEHOLDER.to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return PLACEHOLDER.to_string();
    }
    parse_date_time(raw).map_or_else(
        || PLACEHOLDER.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// Parse the datetime forms the API emits: RFC 3339 first, then the common
/// naive datetime and date-only forms.
fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Keep the wall-clock time as sent.
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Map a severity label to its display color token.
pub fn level_color(level: Option<&str>) -> &'static str {
    match level {
        Some("P0") => "red",
        Some("P1") => "orange",
        Some("P2") => "blue",
        Some("P3") => "green",
        _ => "default",
    }
}

/// Render a duration in seconds: one decimal below a minute, otherwise
/// minutes with the rounded remainder (omitted when it rounds to zero).
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return PLACEHOLDER.to_string();
    };
    if seconds.is_nan() {
        return PLACEHOLDER.to_string();
    }
    if seconds < 60.0 {
        return format!("{seconds:.1}秒");
    }
    #[allow(clippy::cast_possible_truncation)]
    let minutes = (seconds / 60.0).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let remaining = (seconds % 60.0).round() as i64;
    if remaining == 0 {
        format!("{minutes}分")
    } else {
        format!("{minutes}分{remaining}秒")
    }
}
