//! Fixed messages returned to clients. They never echo input or internals.

pub const CSRF_ERROR: &str = "Invalid or expired form token";

pub const RATE_LIMIT_ERROR: &str = "Too many requests, please try again later";

pub const SUBMISSION_FAILED: &str = "Submission failed";

pub const TOKEN_FAILED: &str = "Could not issue a form token";

pub const LOAD_FAILED: &str = "Could not load data";
