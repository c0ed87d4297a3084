//! Constants used throughout the validation system

/// Email address length bounds
pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Password length bounds
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Person name length bounds
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a phone number once separators are stripped
pub const MAX_PHONE_LENGTH: usize = 20;

/// Maximum length for URLs
pub const MAX_URL_LENGTH: usize = 2_048;

/// Free text length bounds
pub const MIN_TEXT_LENGTH: usize = 1;
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Review body length bounds
pub const MIN_REVIEW_LENGTH: usize = 10;
pub const MAX_REVIEW_LENGTH: usize = 2_000;

/// Inclusive rating bounds
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Symbols a password must draw at least one character from
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Tags kept by the HTML sanitizer
pub const ALLOWED_TAGS: [&str; 6] = ["b", "i", "em", "strong", "p", "br"];
