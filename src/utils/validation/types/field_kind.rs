//! The declared semantic kind of a form field.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::SchemaKind;

/// Kinds accepted by the generic entry point. Passwords and ratings have
/// dedicated validators and never go through the dispatcher.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Name,
    Phone,
    Url,
    Text,
    Review,
}

impl FieldKind {
    /// Resolves a kind by name. Unknown names are validated as free text.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or(FieldKind::Text)
    }

    /// Label used in messages when the caller does not supply one
    pub fn default_label(self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::Name => "Name",
            FieldKind::Phone => "Phone number",
            FieldKind::Url => "URL",
            FieldKind::Text => "Input",
            FieldKind::Review => "Review",
        }
    }

    pub fn schema_kind(self) -> SchemaKind {
        match self {
            FieldKind::Email => SchemaKind::Email,
            FieldKind::Name => SchemaKind::Name,
            FieldKind::Phone => SchemaKind::Phone,
            FieldKind::Url => SchemaKind::Url,
            FieldKind::Text => SchemaKind::Text,
            FieldKind::Review => SchemaKind::Review,
        }
    }
}
