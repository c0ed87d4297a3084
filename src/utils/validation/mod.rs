//! Root module for the validation system.
//! Exposes the public API for input validation and sanitization.
//!
//! Everything here is a pure function of its input: no I/O, no logging, no
//! shared mutable state. Callers decide what to do with a rejection.

mod constants;
mod error;
mod form;
mod types;
pub mod validators;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::ValidationError;
pub use form::{FormErrors, FormValidator, ValidatedForm};
pub use types::{FieldKind, SchemaKind, ValidationResult, ValidationSchema};
pub use validators::detect::{detect_sql_injection, detect_xss};
pub use validators::html::sanitize_html;
pub use validators::text::{
    validate_email, validate_name, validate_password, validate_phone, validate_rating,
    validate_review, validate_text, validate_url,
};

use validators::text::{check_email, check_name, check_phone, check_text, check_url};

/// Validates a field of the given kind, using the kind's default label.
pub fn validate_input(raw: &str, kind: FieldKind) -> ValidationResult {
    validate_field(raw, kind, kind.default_label())
}

/// Validates a field of the given kind. `label` names free-text fields in
/// error messages; other kinds use their own label.
pub fn validate_field(raw: &str, kind: FieldKind, label: &str) -> ValidationResult {
    check_field(raw, kind, label).into()
}

/// Same as [`validate_field`] but keeps the typed error.
///
/// The heuristic detectors run before any structural check so a payload is
/// rejected whatever field it targets. Which detector matched is not reported.
pub fn check_field(raw: &str, kind: FieldKind, label: &str) -> Result<String, ValidationError> {
    if detect_sql_injection(raw) {
        return Err(ValidationError::Suspicious);
    }
    if detect_xss(raw) {
        return Err(ValidationError::Suspicious);
    }

    match kind {
        FieldKind::Email => check_email(raw),
        FieldKind::Name => check_name(raw),
        FieldKind::Phone => check_phone(raw),
        FieldKind::Url => check_url(raw),
        FieldKind::Text => check_text(raw, label, kind.schema_kind()),
        FieldKind::Review => check_text(raw, kind.default_label(), kind.schema_kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_kind() {
        let cases = vec![
            ("USER@example.com", FieldKind::Email, "user@example.com"),
            ("Jane Doe", FieldKind::Name, "Jane Doe"),
            ("+1 (555) 123-4567", FieldKind::Phone, "+15551234567"),
            ("https://example.com/path", FieldKind::Url, "https://example.com/path"),
            ("Hello <b>world</b>", FieldKind::Text, "Hello <b>world</b>"),
            ("Best studio in town!", FieldKind::Review, "Best studio in town!"),
        ];

        for (raw, kind, expected) in cases {
            let result = validate_input(raw, kind);
            assert!(result.is_valid, "Should accept {} as {}", raw, kind);
            assert_eq!(result.sanitized_value, expected);
        }
    }

    #[test]
    fn test_suspicious_input_rejected_for_every_kind() {
        let payloads = vec![
            "a@b.com' OR '1'='1",
            "<script>alert(1)</script>",
            "Jane' UNION SELECT password FROM users --",
            "https://example.com/?q=<iframe src=x>",
        ];

        for kind in [
            FieldKind::Email,
            FieldKind::Name,
            FieldKind::Phone,
            FieldKind::Url,
            FieldKind::Text,
            FieldKind::Review,
        ] {
            for payload in &payloads {
                let result = validate_input(payload, kind);
                assert!(!result.is_valid, "Should reject {} as {}", payload, kind);
                assert_eq!(result.error.as_deref(), Some("Invalid input detected"));
            }
        }
    }

    #[test]
    fn test_prose_that_reads_like_sql_is_rejected() {
        let result = validate_input("My favourite query is SELECT * FROM dancers", FieldKind::Review);
        assert_eq!(check_field("SELECT * FROM dancers", FieldKind::Review, ""), Err(ValidationError::Suspicious));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_text() {
        let kind = FieldKind::from_name("course");
        let result = validate_field("  Contemporary  ", kind, "Course");
        assert!(result.is_valid);
        assert_eq!(result.sanitized_value, "Contemporary");

        let result = validate_field("", kind, "Course");
        assert_eq!(result.error.as_deref(), Some("Course is required"));
    }

    #[test]
    fn test_default_label_for_text() {
        assert_eq!(validate_input("", FieldKind::Text).error.as_deref(), Some("Input is required"));
    }
}
