//! Failure taxonomy for user-submitted input.
//!
//! Every rejection carries a message meant to be shown next to the offending
//! form field. Labels are part of the message so that a single form can render
//! "Title is too long" and "Message is required" side by side.

use thiserror::Error;

/// The reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only input
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} is too long (maximum {max} characters)")]
    TooLong { field: String, max: usize },

    /// The input does not have the shape expected for its kind
    #[error("{message}")]
    Malformed { field: String, message: String },

    #[error(
        "Password must contain at least one lowercase letter, one uppercase letter, \
         one number and one special character (@$!%*?&), and no other characters"
    )]
    Composition,

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// A heuristic detector matched. The message never says which one.
    #[error("Invalid input detected")]
    Suspicious,
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    pub(crate) fn too_short(field: &str, min: usize) -> Self {
        Self::TooShort { field: field.to_string(), min }
    }

    pub(crate) fn too_long(field: &str, max: usize) -> Self {
        Self::TooLong { field: field.to_string(), max }
    }

    pub(crate) fn malformed(field: &str, message: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
