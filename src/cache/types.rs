use crate::model::RestaurantView;

pub const NEARBITE_CACHE_HEADER: &str = "X-Nearbite-Cache";
pub const NEARBITE_STATUS_HEADER: &str = "X-Nearbite-Status";
pub const NEARBITE_STATUS_HEALTHY: &str = "healthy";
pub const NEARBITE_STATUS_ERROR: &str = "error";

/// How a geo lookup was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    /// Served from a cached payload.
    Hit,
    /// Recomputed from the store (and written back).
    Miss,
    /// Cache unavailable; recomputed without touching it.
    Bypassed,
}

impl CacheStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Bypassed => "BYPASS",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}

/// Result of [`GeoCache::lookup`](super::GeoCache::lookup).
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLookupResult {
    status: CacheStatus,
    key: Option<String>,
    restaurants: Vec<RestaurantView>,
}

impl GeoLookupResult {
    pub(crate) fn hit(key: String, restaurants: Vec<RestaurantView>) -> Self {
        Self {
            status: CacheStatus::Hit,
            key: Some(key),
            restaurants,
        }
    }

    pub(crate) fn miss(key: String, restaurants: Vec<RestaurantView>) -> Self {
        Self {
            status: CacheStatus::Miss,
            key: Some(key),
            restaurants,
        }
    }

    pub(crate) fn bypassed(restaurants: Vec<RestaurantView>) -> Self {
        Self {
            status: CacheStatus::Bypassed,
            key: None,
            restaurants,
        }
    }

    #[inline]
    pub fn status(&self) -> CacheStatus {
        self.status
    }

    /// The geohash key, unless the cache was bypassed.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[inline]
    pub fn restaurants(&self) -> &[RestaurantView] {
        &self.restaurants
    }

    #[inline]
    pub fn into_restaurants(self) -> Vec<RestaurantView> {
        self.restaurants
    }
}
