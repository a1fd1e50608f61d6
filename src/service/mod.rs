//! Caller-facing restaurant queries.
//!
//! Picks the serving radius for the request time, then routes either to the geo cache (no
//! search term) or to the search aggregator (search term, sequential or concurrent).

pub mod error;
pub mod exchange;


pub use error::{ServiceError, ServiceResult};
pub use exchange::{GetRestaurantsRequest, GetRestaurantsResponse};

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use tracing::{info, instrument};

use crate::cache::{CacheBackend, GeoCache};
use crate::constants::DEFAULT_CACHE_TTL;
use crate::finder::RestaurantFinder;
use crate::policy::serving_radius_km;
use crate::search::{PoolSettings, SearchAggregator, SearchQuery};
use crate::store::RestaurantStore;

/// Which aggregator [`RestaurantService::find_restaurants`] uses for search terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    Sequential,
    #[default]
    Concurrent,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Sequential => "sequential",
            SearchMode::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(SearchMode::Sequential),
            "concurrent" => Ok(SearchMode::Concurrent),
            other => Err(format!("expected 'sequential' or 'concurrent', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub cache_ttl: Duration,
    pub search_mode: SearchMode,
    pub pool: PoolSettings,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            search_mode: SearchMode::default(),
            pool: PoolSettings::default(),
        }
    }
}

pub struct RestaurantService<C: CacheBackend, S: RestaurantStore + 'static> {
    geo_cache: GeoCache<C, S>,
    aggregator: SearchAggregator<S>,
    mode: SearchMode,
}

impl<C: CacheBackend, S: RestaurantStore + 'static> Clone for RestaurantService<C, S> {
    fn clone(&self) -> Self {
        Self {
            geo_cache: self.geo_cache.clone(),
            aggregator: self.aggregator.clone(),
            mode: self.mode,
        }
    }
}

impl<C: CacheBackend, S: RestaurantStore + 'static> std::fmt::Debug for RestaurantService<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantService")
            .field("geo_cache", &self.geo_cache)
            .field("aggregator", &self.aggregator)
            .field("mode", &self.mode)
            .finish()
    }
}

impl<C: CacheBackend, S: RestaurantStore + 'static> RestaurantService<C, S> {
    pub fn new(cache: Arc<C>, store: Arc<S>) -> Self {
        Self::with_settings(cache, store, ServiceSettings::default())
    }

    pub fn with_settings(cache: Arc<C>, store: Arc<S>, settings: ServiceSettings) -> Self {
        let finder = RestaurantFinder::new(store);
        Self {
            geo_cache: GeoCache::with_ttl(cache, finder.clone(), settings.cache_ttl),
            aggregator: SearchAggregator::with_pool(finder, settings.pool),
            mode: settings.search_mode,
        }
    }

    pub fn geo_cache(&self) -> &GeoCache<C, S> {
        &self.geo_cache
    }

    pub fn search_mode(&self) -> SearchMode {
        self.mode
    }

    /// Every open restaurant within the serving radius for `now`, via the geo cache.
    #[instrument(skip(self), fields(lat = request.latitude, lon = request.longitude))]
    pub async fn find_all_restaurants_close_by(
        &self,
        request: &GetRestaurantsRequest,
        now: NaiveTime,
    ) -> ServiceResult<GetRestaurantsResponse> {
        let location = request.location()?;
        let radius_km = serving_radius_km(now);

        let lookup = self.geo_cache.lookup(location, now, radius_km).await?;
        let status = lookup.status();
        let response = GetRestaurantsResponse {
            restaurants: lookup.into_restaurants(),
            cache_status: Some(status),
        };

        info!(
            found = response.len(),
            radius_km,
            cache = %status,
            "Found restaurants close by"
        );
        Ok(response)
    }

    /// Sequential search; strategies that fail are skipped.
    #[instrument(skip(self), fields(lat = request.latitude, lon = request.longitude))]
    pub async fn find_restaurants_by_search_query(
        &self,
        request: &GetRestaurantsRequest,
        now: NaiveTime,
    ) -> ServiceResult<GetRestaurantsResponse> {
        let Some(query) = Self::search_query(request, now)? else {
            info!("Empty search query");
            return Ok(GetRestaurantsResponse::default());
        };

        let restaurants = self.aggregator.search_sequential(&query).await;
        info!(found = restaurants.len(), term = %query.term, "Found restaurants by search");
        Ok(GetRestaurantsResponse::new(restaurants))
    }

    /// Concurrent search; any strategy failure fails the request.
    #[instrument(skip(self), fields(lat = request.latitude, lon = request.longitude))]
    pub async fn find_restaurants_by_search_query_concurrent(
        &self,
        request: &GetRestaurantsRequest,
        now: NaiveTime,
    ) -> ServiceResult<GetRestaurantsResponse> {
        let Some(query) = Self::search_query(request, now)? else {
            info!("Empty search query");
            return Ok(GetRestaurantsResponse::default());
        };

        let restaurants = self.aggregator.search_concurrent(&query).await?;
        info!(found = restaurants.len(), term = %query.term, "Found restaurants by search");
        Ok(GetRestaurantsResponse::new(restaurants))
    }

    /// Close-by listing when no term is sent, otherwise a search in the configured mode.
    pub async fn find_restaurants(
        &self,
        request: &GetRestaurantsRequest,
        now: NaiveTime,
    ) -> ServiceResult<GetRestaurantsResponse> {
        match (request.search_term(), self.mode) {
            (None, _) => self.find_all_restaurants_close_by(request, now).await,
            (Some(_), SearchMode::Sequential) => {
                self.find_restaurants_by_search_query(request, now).await
            }
            (Some(_), SearchMode::Concurrent) => {
                self.find_restaurants_by_search_query_concurrent(request, now)
                    .await
            }
        }
    }

    /// Validates the request and builds the query. `None` for a missing or empty term.
    fn search_query(
        request: &GetRestaurantsRequest,
        now: NaiveTime,
    ) -> ServiceResult<Option<SearchQuery>> {
        let location = request.location()?;
        Ok(request
            .search_term()
            .filter(|term| !term.is_empty())
            .map(|term| SearchQuery::new(location, term, now, serving_radius_km(now))))
    }
}
