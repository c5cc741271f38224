use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Deterministic cache key for a prompt: hex SHA-256 of its text
pub fn cache_key(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    created_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() < ttl
    }
}

/// Time-bounded reply cache for prompts sent outside a conversation.
///
/// Expired entries are dropped when they are next read. The map sits behind a
/// mutex so one cache can be shared between clients via `Arc`.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached reply for `prompt`, if one was stored less than `ttl` ago.
    pub fn get(&self, prompt: &str) -> Option<String> {
        let key = cache_key(prompt);
        let mut entries = self.entries();

        match entries.get(&key) {
            Some(entry) if entry.is_live(self.ttl) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }

        entries.remove(&key);
        None
    }

    /// `(hit, value)` form of [`ResponseCache::get`]
    pub fn lookup(&self, prompt: &str) -> (bool, Option<String>) {
        match self.get(prompt) {
            Some(value) => (true, Some(value)),
            None => (false, None),
        }
    }

    pub fn put(&self, prompt: &str, value: &str) {
        let entry = CacheEntry {
            value: value.to_string(),
            created_at: Instant::now(),
        };
        self.entries().insert(cache_key(prompt), entry);
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(ttl));
        before - entries.len()
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}
