//! Static structural constraints, one set per field kind.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::validation::constants::*;

/// Kinds that own a schema. This is wider than `FieldKind` because passwords
/// are validated through their own entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Email,
    Password,
    Name,
    Phone,
    Url,
    Text,
    Review,
}

/// Structural constraints for one field kind. Built once, never mutated.
#[derive(Debug)]
pub struct ValidationSchema {
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationSchema {
    fn new(pattern: Option<&str>, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        if let (Some(min), Some(max)) = (min_length, max_length) {
            assert!(min <= max, "Schema minimum length {min} exceeds maximum {max}");
        }

        Self {
            pattern: pattern
                .map(|p| Regex::new(p).expect("Failed to compile validation schema regex")),
            min_length,
            max_length,
        }
    }

    pub fn for_kind(kind: SchemaKind) -> &'static ValidationSchema {
        match kind {
            SchemaKind::Email => &EMAIL_SCHEMA,
            SchemaKind::Password => &PASSWORD_SCHEMA,
            SchemaKind::Name => &NAME_SCHEMA,
            SchemaKind::Phone => &PHONE_SCHEMA,
            SchemaKind::Url => &URL_SCHEMA,
            SchemaKind::Text => &TEXT_SCHEMA,
            SchemaKind::Review => &REVIEW_SCHEMA,
        }
    }

    /// Whether the value matches the structural pattern, if there is one
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.as_ref().map_or(true, |p| p.is_match(value))
    }
}

static EMAIL_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new(
        Some(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"),
        Some(MIN_EMAIL_LENGTH),
        Some(MAX_EMAIL_LENGTH),
    )
});

// Composition is checked separately; the pattern only bounds the alphabet.
static PASSWORD_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new(
        Some(r"^[A-Za-z0-9@$!%*?&]+$"),
        Some(MIN_PASSWORD_LENGTH),
        Some(MAX_PASSWORD_LENGTH),
    )
});

// Latin-1 letters minus the multiplication and division signs, plus Latin Extended-A.
static NAME_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new(
        Some(r"^[A-Za-zÀ-ÖØ-öø-ÿĀ-ž\s]+$"),
        Some(MIN_NAME_LENGTH),
        Some(MAX_NAME_LENGTH),
    )
});

static PHONE_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new(Some(r"^\+?[1-9][0-9]{0,15}$"), None, Some(MAX_PHONE_LENGTH))
});

static URL_SCHEMA: Lazy<ValidationSchema> = Lazy::new(|| {
    ValidationSchema::new(
        Some(
            r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*$",
        ),
        None,
        Some(MAX_URL_LENGTH),
    )
});

static TEXT_SCHEMA: Lazy<ValidationSchema> =
    Lazy::new(|| ValidationSchema::new(None, Some(MIN_TEXT_LENGTH), Some(MAX_TEXT_LENGTH)));

static REVIEW_SCHEMA: Lazy<ValidationSchema> =
    Lazy::new(|| ValidationSchema::new(None, Some(MIN_REVIEW_LENGTH), Some(MAX_REVIEW_LENGTH)));
