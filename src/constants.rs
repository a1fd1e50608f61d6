//! Cross-cutting, shared constants.
//!
//! Runtime overrides for the cache and pool values live in [`crate::config::Config`]; these are
//! the defaults it falls back to.

use std::time::Duration;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Serving radius during peak hours.
pub const PEAK_HOURS_SERVING_RADIUS_KM: f64 = 3.0;

/// Serving radius outside peak hours.
pub const NORMAL_HOURS_SERVING_RADIUS_KM: f64 = 5.0;

/// Peak windows as inclusive `(first_hour, last_hour)` pairs on a 24h clock.
///
/// Granularity is the hour: `(8, 10)` covers 08:00 through 10:59.
pub const PEAK_HOUR_WINDOWS: [(u32, u32); 3] = [(8, 10), (13, 14), (19, 21)];

/// Geohash precision (characters) for cache keys. A 7-character cell is roughly 150m x 150m.
pub const GEOHASH_PRECISION: usize = 7;

/// Longest geohash the encoder accepts.
pub const MAX_GEOHASH_PRECISION: usize = 12;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(DEFAULT_CACHE_TTL_SECS);

pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Workers in the concurrent search pool. One per strategy.
pub const SEARCH_POOL_WORKERS: usize = 4;

pub const POOL_SHUTDOWN_DEADLINE_MS: u64 = 800;
pub const POOL_SHUTDOWN_DEADLINE: Duration = Duration::from_millis(POOL_SHUTDOWN_DEADLINE_MS);
