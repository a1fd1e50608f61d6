//! Cache-aside over the "all nearby" lookup, keyed by the caller's geohash cell.
//!
//! Entries are keyed by cell only. A cached list is reused for any caller in the same cell
//! regardless of the radius or time it was computed for, until the TTL expires.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use tracing::{debug, instrument, warn};

use super::backend::CacheBackend;
use super::error::CacheResult;
use super::types::GeoLookupResult;
use crate::constants::{DEFAULT_CACHE_TTL, GEOHASH_PRECISION};
use crate::finder::RestaurantFinder;
use crate::geo::{GeoResult, Location, geohash};
use crate::model::RestaurantView;
use crate::payload::{PayloadDecoder, PayloadEncoder};
use crate::policy::ProximityFilter;
use crate::store::RestaurantStore;

/// Cache key for the cell containing `location`.
#[inline]
pub fn cache_key(location: Location) -> GeoResult<String> {
    geohash(location, GEOHASH_PRECISION)
}

pub struct GeoCache<C: CacheBackend, S: RestaurantStore> {
    cache: Arc<C>,
    finder: RestaurantFinder<S>,
    ttl: Duration,
}

impl<C: CacheBackend, S: RestaurantStore> Clone for GeoCache<C, S> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            finder: self.finder.clone(),
            ttl: self.ttl,
        }
    }
}

impl<C: CacheBackend, S: RestaurantStore> std::fmt::Debug for GeoCache<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoCache")
            .field("ttl", &self.ttl)
            .field("finder", &self.finder)
            .finish_non_exhaustive()
    }
}

impl<C: CacheBackend, S: RestaurantStore> GeoCache<C, S> {
    pub fn new(cache: Arc<C>, finder: RestaurantFinder<S>) -> Self {
        Self::with_ttl(cache, finder, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(cache: Arc<C>, finder: RestaurantFinder<S>, ttl: Duration) -> Self {
        Self { cache, finder, ttl }
    }

    pub fn backend(&self) -> &Arc<C> {
        &self.cache
    }

    pub fn finder(&self) -> &RestaurantFinder<S> {
        &self.finder
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Open restaurants within `radius_km` of `location` at `now`.
    ///
    /// Unavailable cache: full scan, cache untouched. Otherwise a decodable cached payload is
    /// returned as-is; a miss (or an unreadable/undecodable entry) recomputes and writes back.
    /// Only backing-store failures surface as errors.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn lookup(
        &self,
        location: Location,
        now: NaiveTime,
        radius_km: f64,
    ) -> CacheResult<GeoLookupResult> {
        let filter = ProximityFilter::new(location, now, radius_km);

        if !self.cache.is_available().await {
            debug!("Cache unavailable, bypassing");
            let restaurants = self.finder.find_all_nearby(&filter).await?;
            return Ok(GeoLookupResult::bypassed(restaurants));
        }

        let key = cache_key(location)?;

        match self.cache.get(&key).await {
            Ok(Some(payload)) => match PayloadDecoder::decode(&payload) {
                Ok(restaurants) => {
                    debug!(key = %key, count = restaurants.len(), "Geo cache hit");
                    return Ok(GeoLookupResult::hit(key, restaurants));
                }
                Err(e) => warn!(key = %key, error = %e, "Discarding undecodable cache entry"),
            },
            Ok(None) => debug!(key = %key, "Geo cache miss"),
            Err(e) => warn!(key = %key, error = %e, "Cache read failed, recomputing"),
        }

        let restaurants = self.finder.find_all_nearby(&filter).await?;
        self.populate(&key, &restaurants).await;
        Ok(GeoLookupResult::miss(key, restaurants))
    }

    /// Best-effort write-back; failures are logged and swallowed.
    async fn populate(&self, key: &str, restaurants: &[RestaurantView]) {
        let payload = match PayloadEncoder::encode(restaurants) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode cache payload");
                return;
            }
        };

        if let Err(e) = self.cache.set_with_expiry(key, payload, self.ttl).await {
            warn!(key = %key, error = %e, "Failed to write cache entry");
        }
    }
}
