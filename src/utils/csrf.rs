//! Form tokens guarding every state-changing submission.

use std::{
    collections::{HashMap, VecDeque},
    sync::RwLock,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Result};

/// Generates a fresh token from the OS random source (UUID v4)
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Compares a submitted token with the expected one in constant time.
/// Empty tokens never match.
pub fn validate_token(provided: &str, expected: &str) -> bool {
    if provided.is_empty() || expected.is_empty() || provided.len() != expected.len() {
        return false;
    }

    provided
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

/// Registry of issued tokens. A token is good for one submission before it
/// expires. At most `capacity` tokens are held; issuing past that evicts the
/// oldest.
#[derive(Debug)]
pub struct CsrfStore {
    ttl: Duration,
    capacity: usize,
    issued: RwLock<Issued>,
}

/// Expiry per token, plus issue order. Every token shares the same lifetime,
/// so issue order is also expiry order.
#[derive(Debug, Default)]
struct Issued {
    expiries: HashMap<String, Instant>,
    order: VecDeque<String>,
}

impl Issued {
    fn pop_oldest(&mut self) {
        if let Some(token) = self.order.pop_front() {
            self.expiries.remove(&token);
        }
    }

    fn sweep(&mut self, now: Instant) {
        while let Some(token) = self.order.front() {
            let live = self
                .expiries
                .get(token)
                .is_some_and(|expires_at| *expires_at > now);
            if live {
                break;
            }
            self.pop_oldest();
        }
    }
}

impl CsrfStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            issued: RwLock::new(Issued::default()),
        }
    }

    /// Issues a new token and forgets expired ones
    pub fn issue(&self) -> Result<String> {
        let now = Instant::now();
        let expires_at = now
            .checked_add(self.ttl)
            .ok_or(anyhow!("CSRF token lifetime out of range"))?;
        let token = generate_token();

        let mut issued = self.issued.write().or(Err(anyhow!("CSRF store poisoned")))?;
        issued.sweep(now);

        // Consumed tokens linger in the queue until they reach the front
        if issued.order.len() > 2 * self.capacity {
            let Issued { expiries, order } = &mut *issued;
            order.retain(|token| expiries.contains_key(token));
        }
        while issued.expiries.len() >= self.capacity {
            issued.pop_oldest();
        }

        issued.expiries.insert(token.clone(), expires_at);
        issued.order.push_back(token.clone());
        Ok(token)
    }

    /// Accepts a token once, if it was issued here and has not expired
    pub fn consume(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let Ok(mut issued) = self.issued.write() else {
            return false;
        };

        match issued.expiries.remove(token) {
            Some(expires_at) => expires_at > Instant::now(),
            None => false,
        }
    }

    /// Number of tokens currently held
    pub fn outstanding(&self) -> usize {
        self.issued.read().map(|issued| issued.expiries.len()).unwrap_or(0)
    }
}
