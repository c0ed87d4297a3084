//! Validation functions grouped by concern

pub mod detect;
pub mod html;
pub mod text;
