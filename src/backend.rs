//! HTTP side of the application: form submission handlers, the router and
//! the middlewares in front of them.

pub mod error;
pub mod handlers;
mod middlewares;
pub mod models;
pub mod router;

use std::sync::Arc;

use crate::{
    config::Config,
    database::Database,
    utils::{
        csrf::CsrfStore,
        rate_limit::{MemoryRateLimiter, RateLimitStore},
    },
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub rate_limiter: Arc<dyn RateLimitStore>,
    pub csrf: Arc<CsrfStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State with the in-process rate limiter
    pub fn new(config: Config, db: Database) -> Self {
        Self::with_rate_limiter(config, db, Arc::new(MemoryRateLimiter::new()))
    }

    pub fn with_rate_limiter(
        config: Config,
        db: Database,
        rate_limiter: Arc<dyn RateLimitStore>,
    ) -> Self {
        Self {
            db: Arc::new(db),
            rate_limiter,
            csrf: Arc::new(CsrfStore::new(config.csrf_ttl, config.csrf_max_tokens)),
            config: Arc::new(config),
        }
    }
}
