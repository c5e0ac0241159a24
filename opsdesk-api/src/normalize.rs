//! Field normalization shared by every resource proxy.
//!
//! Submitted records are canonicalized before anything else happens: string
//! fields are trimmed and collapse to an explicit `None` when empty, numeric
//! fields must be finite. Required-field checks run on the normalized
//! values, so a whitespace-only name is rejected without ever contacting
//! the external store.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a finite number")]
    InvalidAmount(&'static str),
}

/// Trimmed value, or `None` for missing / empty / whitespace-only input.
/// Never leaves a field unset: callers serialize `None` as an explicit
/// `null` so partial updates stay unambiguous.
pub fn opt_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalized required string field.
pub fn require_text(value: &Option<String>, field: &'static str) -> Result<String, NormalizeError> {
    opt_text(value).ok_or(NormalizeError::MissingField(field))
}

/// Required numeric field; NaN and infinities are rejected alongside
/// missing values.
pub fn require_amount(value: Option<f64>, field: &'static str) -> Result<f64, NormalizeError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(NormalizeError::InvalidAmount(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_text_trims_and_drops_empty() {
        assert_eq!(opt_text(&Some("  Acme  ".to_string())), Some("Acme".to_string()));
        assert_eq!(opt_text(&Some("   ".to_string())), None);
        assert_eq!(opt_text(&Some(String::new())), None);
        assert_eq!(opt_text(&None), None);
    }

    #[test]
    fn test_require_text_rejects_whitespace_only() {
        assert_eq!(require_text(&Some(" x ".to_string()), "name"), Ok("x".to_string()));
        assert_eq!(
            require_text(&Some("  ".to_string()), "name"),
            Err(NormalizeError::MissingField("name"))
        );
        assert_eq!(require_text(&None, "name"), Err(NormalizeError::MissingField("name")));
    }

    #[test]
    fn test_require_amount_rejects_non_finite() {
        assert_eq!(require_amount(Some(12.5), "amount"), Ok(12.5));
        assert_eq!(require_amount(Some(0.0), "amount"), Ok(0.0));
        assert!(require_amount(Some(f64::NAN), "amount").is_err());
        assert!(require_amount(Some(f64::INFINITY), "amount").is_err());
        assert!(require_amount(None, "amount").is_err());
    }
}
