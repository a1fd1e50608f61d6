//! Nearbite library crate (used by the server binary and integration tests).
//!
//! Answers "which restaurants near me are open right now", optionally narrowed by a search term.
//!
//! # Layers
//!
//! - [`geo`], [`policy`]: distance, opening hours, peak-hour serving radius, proximity filter.
//! - [`store`]: backing-store contract ([`RestaurantStore`]) and the in-memory catalog.
//! - [`finder`]: per-strategy lookups over a store, filtered for the request.
//! - [`cache`]: geohash-keyed cache-aside over the "everything nearby" scan.
//! - [`search`]: sequential and pooled concurrent fan-out across the four search strategies.
//! - [`service`]: the caller-facing [`RestaurantService`].
//! - [`gateway`]: Axum HTTP surface.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod constants;
pub mod finder;
pub mod gateway;
pub mod geo;
pub mod model;
pub mod payload;
pub mod policy;
pub mod search;
pub mod service;
pub mod store;

pub use cache::{
    BackendError, CacheBackend, CacheError, CacheResult, CacheStatus, GeoCache, GeoLookupResult,
    MokaCacheBackend, NEARBITE_CACHE_HEADER, NEARBITE_STATUS_HEADER, cache_key,
};
#[cfg(any(test, feature = "mock"))]
pub use cache::MockCacheBackend;

pub use config::{Config, ConfigError};
pub use finder::{RestaurantFinder, SearchStrategy};
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
pub use geo::{GeoError, GeoResult, Location, distance_km, geohash};
pub use model::{ItemRecord, MenuRecord, RestaurantRecord, RestaurantView};
pub use payload::{PayloadDecoder, PayloadEncoder, PayloadError};
pub use policy::{ProximityFilter, is_eligible, is_open, is_peak_hour, serving_radius_km};
pub use search::{
    PoolError, PoolSettings, SearchAggregator, SearchError, SearchQuery, SearchResult,
    WorkerPool, search_concurrent, search_sequential,
};
pub use service::{
    GetRestaurantsRequest, GetRestaurantsResponse, RestaurantService, SearchMode, ServiceError,
    ServiceResult, ServiceSettings,
};
#[cfg(any(test, feature = "mock"))]
pub use store::MockRestaurantStore;
pub use store::{Catalog, InMemoryStore, RestaurantStore, StoreError, StoreResult};
