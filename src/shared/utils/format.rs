use chrono::{DateTime, Local, TimeZone};

/// Seconds as a compact `2h 15m` / `45m` duration.
pub fn format_duration(seconds: Option<i64>) -> String {
    let seconds = match seconds {
        Some(s) if s > 0 => s,
        _ => return "0m".to_string(),
    };
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Unix timestamp as a local `YYYY-MM-DD HH:MM` string.
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp.and_then(|ts| Local.timestamp_opt(ts, 0).single()) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

/// ISO-8601 timestamp (as returned by Tracearr) rendered in local time.
pub fn format_iso_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => value.to_string(),
    }
}

/// Truncate to at most `max` characters, counting chars rather than bytes
/// so multibyte titles don't split mid-codepoint.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        value.chars().take(max).collect()
    }
}

/// The original overview ellipsis: first 100 chars plus `...` when cut.
pub fn ellipsize(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(max).collect();
        cut.push_str("...");
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_zero_and_missing() {
        assert_eq!(format_duration(None), "0m");
        assert_eq!(format_duration(Some(0)), "0m");
    }

    #[test]
    fn duration_sub_hour() {
        assert_eq!(format_duration(Some(59)), "0m");
        assert_eq!(format_duration(Some(2700)), "45m");
    }

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_duration(Some(3900)), "1h 5m");
        assert_eq!(format_duration(Some(7200)), "2h 0m");
    }

    #[test]
    fn missing_timestamp_is_na() {
        assert_eq!(format_timestamp(None), "N/A");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("abc", 4), "abc");
        assert_eq!(truncate("日本語のタイトル", 3), "日本語");
    }

    #[test]
    fn ellipsize_appends_dots_only_when_cut() {
        assert_eq!(ellipsize("short", 100), "short");
        let long = "x".repeat(120);
        let cut = ellipsize(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn unparseable_iso_passes_through() {
        assert_eq!(format_iso_timestamp("garbage"), "garbage");
    }
}
