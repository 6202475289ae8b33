// src/utils.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Placeholder for any absent value
pub const NOT_AVAILABLE: &str = "N/A";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Blank text degrades to the placeholder
pub fn or_na(text: &str) -> String {
    if text.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

pub fn opt_or_na(text: Option<&str>) -> String {
    text.map(or_na).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render a JSON scalar the way a person would read it (strings unquoted)
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) => or_na(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                items
                    .iter()
                    .map(display_scalar)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, display_scalar(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub fn display_opt_scalar(value: Option<&Value>) -> String {
    value
        .map(display_scalar)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Joins a list for inline display, empty lists become the placeholder
pub fn join_or_na(items: &[String], sep: &str) -> String {
    if items.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        items.join(sep)
    }
}

pub fn format_timestamp(ts: Option<&NaiveDateTime>) -> String {
    ts.map(|t| t.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parse the timestamp forms the analysis service emits: RFC 3339 with an
/// offset, naive ISO 8601 (`T` or space separated, optional fraction), or a
/// bare date. Offsets are normalised to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Strip trailing slashes so endpoint paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na("Enterprise"), "Enterprise");
        assert_eq!(or_na("   "), "N/A");
        assert_eq!(opt_or_na(None), "N/A");
        assert_eq!(opt_or_na(Some("Berlin")), "Berlin");
    }

    #[test]
    fn test_display_scalar() {
        assert_eq!(display_scalar(&json!(2015)), "2015");
        assert_eq!(display_scalar(&json!("2015")), "2015");
        assert_eq!(display_scalar(&json!(null)), "N/A");
        assert_eq!(display_scalar(&json!(["a", "b"])), "a, b");
        assert_eq!(display_opt_scalar(None), "N/A");
    }

    #[test]
    fn test_parse_timestamp() {
        let naive = parse_timestamp("2024-01-01T12:00:00").unwrap();
        assert_eq!(format_timestamp(Some(&naive)), "2024-01-01 12:00:00");

        let fractional = parse_timestamp("2024-01-01T12:00:00.123456").unwrap();
        assert_eq!(format_timestamp(Some(&fractional)), "2024-01-01 12:00:00");

        let offset = parse_timestamp("2024-01-01T14:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(Some(&offset)), "2024-01-01 12:00:00");

        let date = parse_timestamp("2024-03-05").unwrap();
        assert_eq!(format_timestamp(Some(&date)), "2024-03-05 00:00:00");

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
        assert_eq!(format_timestamp(None), "N/A");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(normalize_base_url(" http://host "), "http://host");
    }
}
