//! Per-kind structural validators.

use unicode_normalization::UnicodeNormalization;
use url::Url;
use validator::ValidateEmail;

use super::html::sanitize_html;
use crate::utils::validation::constants::*;
use crate::utils::validation::types::{SchemaKind, ValidationResult, ValidationSchema};
use crate::utils::validation::ValidationError;

type Checked = Result<String, ValidationError>;

/// Applies the length bounds of a schema to an already trimmed value
fn check_length(value: &str, schema: &ValidationSchema, field: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();

    if let Some(min) = schema.min_length {
        if length < min {
            return Err(ValidationError::too_short(field, min));
        }
    }
    if let Some(max) = schema.max_length {
        if length > max {
            return Err(ValidationError::too_long(field, max));
        }
    }
    Ok(())
}

pub(crate) fn check_email(raw: &str) -> Checked {
    let schema = ValidationSchema::for_kind(SchemaKind::Email);
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err(ValidationError::required("Email"));
    }
    check_length(&email, schema, "Email")?;

    // Structural pattern first, then the HTML5 rules (label lengths, dots)
    if !schema.matches(&email) || !email.as_str().validate_email() {
        return Err(ValidationError::malformed("Email", "Please enter a valid email address"));
    }

    Ok(email)
}

/// Validates an email address; the cleaned value is trimmed and lowercased.
pub fn validate_email(raw: &str) -> ValidationResult {
    check_email(raw).into()
}

/// Passwords are only accepted or rejected, never cleaned.
pub fn validate_password(raw: &str) -> Result<(), ValidationError> {
    let schema = ValidationSchema::for_kind(SchemaKind::Password);

    if raw.is_empty() {
        return Err(ValidationError::required("Password"));
    }
    check_length(raw, schema, "Password")?;

    let has_lowercase = raw.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = raw.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    let has_symbol = raw.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !(has_lowercase && has_uppercase && has_digit && has_symbol) || !schema.matches(raw) {
        return Err(ValidationError::Composition);
    }

    Ok(())
}

pub(crate) fn check_name(raw: &str) -> Checked {
    let schema = ValidationSchema::for_kind(SchemaKind::Name);
    // Compose accents so "e" + U+0301 is checked as a single letter
    let name: String = raw.trim().nfc().collect();

    if name.is_empty() {
        return Err(ValidationError::required("Name"));
    }
    check_length(&name, schema, "Name")?;

    if !schema.matches(&name) {
        return Err(ValidationError::malformed("Name", "Name can only contain letters and spaces"));
    }

    Ok(name)
}

/// Validates a person's name: letters (accents included) and spaces only.
pub fn validate_name(raw: &str) -> ValidationResult {
    check_name(raw).into()
}

pub(crate) fn check_phone(raw: &str) -> Checked {
    let schema = ValidationSchema::for_kind(SchemaKind::Phone);
    let phone: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if phone.is_empty() {
        return Err(ValidationError::required("Phone number"));
    }
    check_length(&phone, schema, "Phone number")?;

    if !schema.matches(&phone) {
        return Err(ValidationError::malformed(
            "Phone number",
            "Please enter a valid phone number",
        ));
    }

    Ok(phone)
}

/// Validates an E.164-shaped phone number after stripping spaces, hyphens and
/// parentheses.
pub fn validate_phone(raw: &str) -> ValidationResult {
    check_phone(raw).into()
}

pub(crate) fn check_url(raw: &str) -> Checked {
    let schema = ValidationSchema::for_kind(SchemaKind::Url);
    let url = raw.trim();

    if url.is_empty() {
        return Err(ValidationError::required("URL"));
    }
    check_length(url, schema, "URL")?;

    let parses_as_web_url = Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false);

    if !schema.matches(url) || !parses_as_web_url {
        return Err(ValidationError::malformed("URL", "Please enter a valid http(s) URL"));
    }

    Ok(url.to_string())
}

/// Validates an http(s) URL by shape only; nothing is resolved or fetched.
pub fn validate_url(raw: &str) -> ValidationResult {
    check_url(raw).into()
}

pub(crate) fn check_text(raw: &str, label: &str, kind: SchemaKind) -> Checked {
    let schema = ValidationSchema::for_kind(kind);
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::required(label));
    }
    check_length(text, schema, label)?;

    Ok(sanitize_html(text))
}

/// Validates generic free text. Messages use `label`, e.g. "Title is too long".
pub fn validate_text(raw: &str, label: &str) -> ValidationResult {
    check_text(raw, label, SchemaKind::Text).into()
}

/// Validates a review or testimonial body.
pub fn validate_review(raw: &str) -> ValidationResult {
    check_text(raw, "Review", SchemaKind::Review).into()
}

pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if !rating.is_finite() {
        return Err(ValidationError::NotANumber { field: "Rating".to_string() });
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "Rating".to_string(),
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok(())
}
