//! Form intake for the dance academy website: input validation and
//! sanitization, submission rate limiting, CSRF tokens and the document store
//! behind the public forms.

pub mod backend;
pub mod config;
pub mod consts;
pub mod database;
pub mod utils;
