//! Geohash-keyed cache-aside layer over the nearby-restaurants scan.

pub mod backend;
pub mod error;
pub mod geo;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


pub use backend::{CacheBackend, MokaCacheBackend};
pub use error::{BackendError, BackendResult, CacheError, CacheResult};
pub use geo::{GeoCache, cache_key};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCacheBackend;
pub use types::{
    CacheStatus, GeoLookupResult, NEARBITE_CACHE_HEADER, NEARBITE_STATUS_ERROR,
    NEARBITE_STATUS_HEADER, NEARBITE_STATUS_HEALTHY,
};
