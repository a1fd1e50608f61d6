//! Instrumented cache backend for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::backend::{CacheBackend, MokaCacheBackend};
use super::error::{BackendError, BackendResult};

/// Wraps a [`MokaCacheBackend`], counting calls and injecting read/write failures.
#[derive(Debug, Default)]
pub struct MockCacheBackend {
    inner: MokaCacheBackend,
    gets: AtomicUsize,
    sets: AtomicUsize,
    availability_checks: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    last_ttl: Mutex<Option<Duration>>,
}

impl MockCacheBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that reports itself unavailable.
    pub fn unavailable() -> Self {
        let mock = Self::default();
        mock.set_available(false);
        mock
    }

    pub fn inner(&self) -> &MokaCacheBackend {
        &self.inner
    }

    pub fn set_available(&self, available: bool) {
        self.inner.set_available(available);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stores `raw` under `key` as-is, bypassing the payload codec.
    pub fn plant(&self, key: &str, raw: &str) {
        self.inner
            .insert(key, raw.to_string(), Duration::from_secs(3600));
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.inner.peek(key)
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn availability_checks(&self) -> usize {
        self.availability_checks.load(Ordering::SeqCst)
    }

    /// TTL passed to the most recent write.
    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock()
    }
}

impl CacheBackend for MockCacheBackend {
    async fn is_available(&self) -> bool {
        self.availability_checks.fetch_add(1, Ordering::SeqCst);
        self.inner.is_available().await
    }

    async fn get(&self, key: &str) -> BackendResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(BackendError::ReadFailed {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.inner.get(key).await
    }

    async fn set_with_expiry(&self, key: &str, value: String, ttl: Duration) -> BackendResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        *self.last_ttl.lock() = Some(ttl);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BackendError::WriteFailed {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.inner.set_with_expiry(key, value, ttl).await
    }
}
