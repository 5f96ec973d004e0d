//! In-process OTP store backed by a mutex-guarded map

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;

use super::clock::{Clock, SystemClock};
use super::store::OtpStore;
use crate::domain::entities::OtpCode;

/// Default cap on concurrently stored codes
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// In-memory [`OtpStore`] for single-process deployments and tests
///
/// Keeps at most `max_entries` live codes. When the cap is reached the
/// store first drops expired records, then the record with the oldest
/// issue time, so a burst of signups cannot grow the map without bound.
pub struct MemoryOtpStore {
    entries: Mutex<HashMap<String, OtpCode>>,
    clock: Arc<dyn Clock>,
    max_entries: usize,
}

impl MemoryOtpStore {
    /// Create a store on the system clock with the default capacity
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a store that reads time from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Override the capacity cap
    pub fn with_capacity(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Number of records currently held, expired ones included
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_for_insert(
        entries: &mut HashMap<String, OtpCode>,
        now: chrono::DateTime<chrono::Utc>,
        max_entries: usize,
    ) {
        entries.retain(|_, record| !record.is_expired(now));
        while entries.len() >= max_entries {
            let oldest = entries
                .values()
                .min_by_key(|record| record.issued_at)
                .map(|record| record.email.clone());
            match oldest {
                Some(email) => {
                    entries.remove(&email);
                }
                None => break,
            }
        }
    }
}

impl Default for MemoryOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        let now = self.clock.now();
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("OTP store lock poisoned: {}", e))?;

        if !entries.contains_key(email) && entries.len() >= self.max_entries {
            Self::evict_for_insert(&mut entries, now, self.max_entries);
        }

        let record = OtpCode::new(email.to_string(), code.to_string(), ttl, now);
        entries.insert(email.to_string(), record);
        Ok(())
    }

    async fn consume_if_match(&self, email: &str, candidate: &str) -> Result<bool, String> {
        let now = self.clock.now();
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("OTP store lock poisoned: {}", e))?;

        let matched = match entries.get(email) {
            Some(record) if record.is_expired(now) => {
                entries.remove(email);
                false
            }
            Some(record) if record.matches(candidate) => {
                entries.remove(email);
                true
            }
            Some(_) => false,
            None => false,
        };

        Ok(matched)
    }
}
