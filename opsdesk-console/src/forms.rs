//! Free-text JSON fields (portal credentials, tracking details).
//!
//! The text box holds JSON as typed by the user; it is parsed locally and
//! rejected before any request goes out, and stored values render back to
//! pretty-printed text when the edit form opens.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum JsonFieldError {
    #[error("invalid JSON: {0}")]
    Malformed(String),
}

/// Parse the text box content. Empty or whitespace-only text means the
/// field is absent.
pub fn parse_json_field(text: &str) -> Result<Option<serde_json::Value>, JsonFieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| JsonFieldError::Malformed(e.to_string()))
}

/// Render a stored JSON value back into the editable text field. An absent
/// value renders as an empty object, matching what the add form suggests.
pub fn render_json_field(value: &Option<serde_json::Value>) -> String {
    match value {
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| "{}".to_string()),
        None => "{}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_object() {
        let text = r#"{"user":"a","pass":"b"}"#;
        let parsed = parse_json_field(text).unwrap();
        assert_eq!(parsed, Some(json!({"user": "a", "pass": "b"})));

        // Reopening the edit form reproduces the same object, modulo
        // formatting
        let rendered = render_json_field(&parsed);
        let reparsed = parse_json_field(&rendered).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_malformed_json_is_rejected_locally() {
        // unquoted keys, as a user would plausibly type
        assert!(matches!(
            parse_json_field("{user: a}"),
            Err(JsonFieldError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_text_means_absent() {
        assert_eq!(parse_json_field("").unwrap(), None);
        assert_eq!(parse_json_field("   ").unwrap(), None);
    }

    #[test]
    fn test_absent_value_renders_empty_object() {
        assert_eq!(render_json_field(&None), "{}");
    }
}
