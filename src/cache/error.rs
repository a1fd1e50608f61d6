use thiserror::Error;

use crate::geo::GeoError;
use crate::store::StoreError;

/// Failures reported by a [`CacheBackend`](super::CacheBackend).
///
/// The geo cache degrades on every one of these, so they never leave the cache layer.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("cache backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("cache read failed for key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("cache write failed for key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Failures returned by [`GeoCache::lookup`](super::GeoCache::lookup).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("invalid cache key: {0}")]
    Key(#[from] GeoError),

    #[error("backing store lookup failed: {0}")]
    Store(#[from] StoreError),
}

pub type BackendResult<T> = Result<T, BackendError>;

pub type CacheResult<T> = Result<T, CacheError>;
