//! Per-client login attempt limiter.
//!
//! Fixed-window counter keyed by client identifier (normally the IP):
//!
//! 1. No entry, or the entry's window started more than `window` ago:
//!    reset to `{count: 1, window_start: now}` and allow.
//! 2. `count >= max_attempts`: deny, entry unchanged.
//! 3. Otherwise increment and allow.
//!
//! Every call counts as an attempt, whether or not the login it guards
//! succeeds. A burst that straddles a window boundary can admit up to
//! `2 * max_attempts` attempts in quick succession.
//!
//! Entries are only removed by `sweep_expired`; without periodic sweeping
//! the map grows with the number of distinct client keys.

use crate::RateLimitConfig;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, warn};

#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

pub struct LoginRateLimiter {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Record an attempt for `client_key` and report whether it may proceed
    pub fn is_allowed(&self, client_key: &str) -> bool {
        self.is_allowed_at(client_key, Instant::now())
    }

    pub(crate) fn is_allowed_at(&self, client_key: &str, now: Instant) -> bool {
        // Read, decide and update under one lock so concurrent attempts
        // from the same key cannot both pass the limit check.
        let mut entries = self.lock();

        match entries.get_mut(client_key) {
            Some(entry) if !self.window_elapsed(entry, now) => {
                if entry.count >= self.config.max_attempts {
                    warn!(
                        "Login rate limit exceeded for {} ({} attempts)",
                        client_key, entry.count
                    );
                    return false;
                }

                entry.count += 1;
                true
            }
            _ => {
                entries.insert(
                    client_key.to_string(),
                    RateLimitEntry {
                        count: 1,
                        window_start: now,
                    },
                );
                true
            }
        }
    }

    /// Drop entries whose window has elapsed. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    pub(crate) fn sweep_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.lock();
        let before = entries.len();

        entries.retain(|_, entry| !self.window_elapsed(entry, now));

        let removed = before - entries.len();
        if removed > 0 {
            debug!(
                "Swept {} expired rate limit entries ({} remaining)",
                removed,
                entries.len()
            );
        }
        removed
    }

    /// Number of client keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }

    fn window_elapsed(&self, entry: &RateLimitEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.window_start) > self.config.window
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RateLimitEntry>> {
        // The map holds plain counters; a panic mid-update cannot leave it
        // in a state worse than a lost increment.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
