//! Per-input memoization for provider calls.
//!
//! Keyed by the normalized serialization of the call arguments. Bounded LRU
//! rather than unbounded: distinct submissions per session are expected to
//! be few, but a long-running process must not grow without limit.

use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::outcome::ProviderOutcome;

pub const DEFAULT_CAPACITY: usize = 64;

/// A bounded, async-safe memo cache of provider outcomes.
pub struct MemoCache {
    inner: Mutex<LruCache<String, ProviderOutcome>>,
}

impl MemoCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CAPACITY).unwrap());
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub async fn get(&self, key: &str) -> Option<ProviderOutcome> {
        let mut cache = self.inner.lock().await;
        let hit = cache.get(key).cloned();
        if hit.is_some() {
            debug!(key, "memo cache hit");
        }
        hit
    }

    pub async fn put(&self, key: String, outcome: ProviderOutcome) {
        self.inner.lock().await.put(key, outcome);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
