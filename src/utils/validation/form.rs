//! Whole-form validation.
//!
//! Every field of a submission is checked before anything is reported, so a
//! form can show all of its errors at once.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{check_field, validate_rating, FieldKind, ValidationError};

/// Collects the outcome of each field of one submission.
#[derive(Debug, Default)]
pub struct FormValidator {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, ValidationError>,
}

/// Sanitized values of a form that passed validation, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    values: BTreeMap<String, String>,
}

/// Per-field errors of a rejected form
#[derive(Debug, Clone, PartialEq)]
pub struct FormErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a required field
    pub fn field(&mut self, name: &str, raw: &str, kind: FieldKind, label: &str) -> &mut Self {
        match check_field(raw, kind, label) {
            Ok(value) => {
                self.values.insert(name.to_string(), value);
            }
            Err(error) => {
                self.errors.insert(name.to_string(), error);
            }
        }
        self
    }

    /// Validates a field only when it was filled in
    pub fn optional_field(
        &mut self,
        name: &str,
        raw: Option<&str>,
        kind: FieldKind,
        label: &str,
    ) -> &mut Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => self.field(name, raw, kind, label),
            _ => self,
        }
    }

    pub fn rating(&mut self, name: &str, rating: f64) -> &mut Self {
        if let Err(error) = validate_rating(rating) {
            self.errors.insert(name.to_string(), error);
        }
        self
    }

    pub fn finish(self) -> Result<ValidatedForm, FormErrors> {
        if self.errors.is_empty() {
            Ok(ValidatedForm { values: self.values })
        } else {
            Err(FormErrors { errors: self.errors })
        }
    }
}

impl ValidatedForm {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Removes and returns a value; missing fields yield an empty string
    pub fn take(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }

    /// Removes and returns a value that may have been left out
    pub fn take_optional(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }
}

impl FormErrors {
    /// Field names paired with their typed errors
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(name, error)| (name.as_str(), error))
    }

    pub fn get(&self, name: &str) -> Option<&ValidationError> {
        self.errors.get(name)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for a value returned by `FormValidator::finish`
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any field tripped an injection detector
    pub fn is_suspicious(&self) -> bool {
        self.errors.values().any(|e| matches!(e, ValidationError::Suspicious))
    }
}

/// Serialises as `{"field": "message", ...}`
impl Serialize for FormErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.errors.iter().map(|(name, error)| (name, error.to_string())))
    }
}
