//! Type definitions for the validation system

mod field_kind;
mod result;
mod schema;

// Re-export commonly used types and functions
pub use field_kind::FieldKind;
pub use result::ValidationResult;
pub use schema::{SchemaKind, ValidationSchema};
