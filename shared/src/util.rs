//! Small shared utilities.

use chrono::DateTime;

/// Transliteration-based slug, the same mapping the storefront uses for
/// category and product links ("Тормозные колодки" -> "tormoznye-kolodki").
pub fn slugify(input: &str) -> String {
    slug::slugify(input)
}

/// Render an RFC 3339 timestamp as `dd.mm.yyyy, HH:MM:SS` (UTC).
/// Absent or unparseable input renders as `-`.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%d.%m.%Y, %H:%M:%S").to_string(),
        Err(_) => "-".to_string(),
    }
}

/// Canonicalize a free-form JSON text field: parseable input is re-encoded
/// compactly, anything else passes through verbatim, blank input is dropped.
pub fn normalize_json_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(parsed) => serde_json::to_string(&parsed).ok(),
        Err(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Тормозные колодки"), "tormoznye-kolodki");
        assert_eq!(slugify("Новинки"), "novinki");
    }

    #[test]
    fn test_slugify_latin_and_spacing() {
        assert_eq!(slugify("Brake Pads  PRO"), "brake-pads-pro");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-01T10:20:30Z"),
            "01.03.2024, 10:20:30"
        );
        assert_eq!(format_timestamp(""), "-");
        assert_eq!(format_timestamp("yesterday"), "-");
    }

    #[test]
    fn test_normalize_json_field() {
        assert_eq!(normalize_json_field("  "), None);
        assert_eq!(
            normalize_json_field("{\n  \"oem\": \"123\"\n}"),
            Some("{\"oem\":\"123\"}".to_string())
        );
        // invalid JSON passes through untouched
        assert_eq!(
            normalize_json_field("oem: 123"),
            Some("oem: 123".to_string())
        );
    }
}
