//! Default values for the runtime configuration.

pub const HTTP_PORT: u16 = 8080; // Default HTTP port.
pub const DATA_PATH: &str = "./data/academy.yaml"; // Document store file.
pub const RATE_LIMIT_MAX: u32 = 5; // Submissions per window and client.
pub const RATE_LIMIT_WINDOW_SECS: u64 = 60;
pub const CSRF_TTL_SECS: u64 = 3_600; // Lifetime of an issued form token.
pub const CSRF_MAX_TOKENS: usize = 10_000; // Outstanding form tokens kept at once.
pub const TRUST_PROXY: bool = false; // Key clients on X-Forwarded-For.
pub const MAX_DURATION_SECS: u64 = 7 * 24 * 3_600; // Upper bound for windows and lifetimes.
