//! Key-value cache backend contract and the in-process moka implementation.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;

use super::error::{BackendError, BackendResult};
use crate::constants::DEFAULT_CACHE_CAPACITY;

/// A string-keyed, string-valued cache with per-entry expiry.
pub trait CacheBackend: Send + Sync {
    /// Whether the backend can currently serve requests. Callers skip the cache entirely when
    /// this is `false`.
    fn is_available(&self) -> impl Future<Output = bool> + Send;

    /// Reads `key`. `Ok(None)` is a miss.
    fn get(&self, key: &str) -> impl Future<Output = BackendResult<Option<String>>> + Send;

    /// Writes `key`, replacing any previous value and expiring it after `ttl`.
    fn set_with_expiry(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = BackendResult<()>> + Send;
}

#[derive(Debug, Clone)]
struct CachedValue {
    payload: Arc<str>,
    ttl: Duration,
}

struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-memory [`CacheBackend`] with bounded capacity (LRU-ish eviction) and per-entry TTL.
///
/// Availability is a switch so operators and tests can take the cache out of the request path
/// without rebuilding the service.
pub struct MokaCacheBackend {
    entries: Cache<String, CachedValue>,
    available: AtomicBool,
}

impl MokaCacheBackend {
    /// Creates a backend with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .expire_after(PerEntryTtl)
                .build(),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    #[inline]
    pub fn available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Synchronous read, ignoring availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|value| value.payload.to_string())
    }

    /// Synchronous write, ignoring availability.
    pub fn insert(&self, key: &str, value: String, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            CachedValue {
                payload: Arc::from(value),
                ttl,
            },
        );
    }

    pub fn remove(&self, key: &str) {
        self.entries.invalidate(key);
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }
}

impl Default for MokaCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MokaCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheBackend")
            .field("entries", &self.entries.entry_count())
            .field("available", &self.available())
            .finish()
    }
}

impl CacheBackend for MokaCacheBackend {
    async fn is_available(&self) -> bool {
        self.available()
    }

    async fn get(&self, key: &str) -> BackendResult<Option<String>> {
        if !self.available() {
            return Err(BackendError::Unavailable {
                reason: "backend switched off".to_string(),
            });
        }
        Ok(self.peek(key))
    }

    async fn set_with_expiry(&self, key: &str, value: String, ttl: Duration) -> BackendResult<()> {
        if !self.available() {
            return Err(BackendError::Unavailable {
                reason: "backend switched off".to_string(),
            });
        }
        self.insert(key, value, ttl);
        Ok(())
    }
}
