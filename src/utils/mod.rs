pub mod csrf;
pub mod error_messages;
pub mod image_fallback;
pub mod rate_limit;
pub mod validation;
