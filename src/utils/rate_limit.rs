//! Fixed-window request counting keyed by an arbitrary identifier.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use async_trait::async_trait;

/// Store seam for the limiter. The in-process map below is enough for a
/// single instance; several instances need an implementation backed by a
/// shared key-value service.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Records one request for `identifier` and tells whether it is allowed
    async fn check_limit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool;
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Counter state for one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_time: Instant,
}

/// In-process fixed-window limiter.
#[derive(Debug, Default)]
pub struct MemoryRateLimiter<C = SystemClock> {
    clock: C,
    entries: Mutex<HashMap<String, RateLimitEntry>>,
}

impl MemoryRateLimiter {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> MemoryRateLimiter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Counts one request for `identifier`.
    ///
    /// The first request of a window is always allowed. Later ones are allowed
    /// while fewer than `max_requests` have been counted; a denied request
    /// neither counts nor moves the window.
    pub fn check_limit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries.retain(|_, entry| entry.reset_time > now);

        if let Some(entry) = entries.get_mut(identifier) {
            if entry.count >= max_requests {
                return false;
            }
            entry.count += 1;
            return true;
        }

        // A window too long to represent is refused rather than left unbounded
        let Some(reset_time) = now.checked_add(window) else {
            return false;
        };
        entries.insert(identifier.to_string(), RateLimitEntry { count: 1, reset_time });
        true
    }

    /// Current entry for an identifier, if its window is still open
    pub fn entry(&self, identifier: &str) -> Option<RateLimitEntry> {
        let now = self.clock.now();
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(identifier)
            .filter(|entry| entry.reset_time > now)
            .copied()
    }

    /// Number of identifiers currently tracked, expired ones included
    pub fn tracked(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl<C: Clock> RateLimitStore for MemoryRateLimiter<C> {
    async fn check_limit(&self, identifier: &str, max_requests: u32, window: Duration) -> bool {
        MemoryRateLimiter::<C>::check_limit(self, identifier, max_requests, window)
    }
}
