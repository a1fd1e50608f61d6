//! Fan a search term out to every strategy and merge the groups in strategy order.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use tracing::{debug, instrument, warn};

use super::error::{SearchError, SearchResult};
use super::pool::{TaskHandle, WorkerPool};
use crate::constants::{POOL_SHUTDOWN_DEADLINE, SEARCH_POOL_WORKERS};
use crate::finder::{RestaurantFinder, SearchStrategy};
use crate::geo::Location;
use crate::model::RestaurantView;
use crate::policy::ProximityFilter;
use crate::store::{RestaurantStore, StoreResult};

type StrategyHandle = (SearchStrategy, TaskHandle<StoreResult<Vec<RestaurantView>>>);

/// One search request, resolved to a location, time and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub location: Location,
    pub term: String,
    pub now: NaiveTime,
    pub radius_km: f64,
}

impl SearchQuery {
    pub fn new(location: Location, term: impl Into<String>, now: NaiveTime, radius_km: f64) -> Self {
        Self {
            location,
            term: term.into(),
            now,
            radius_km,
        }
    }

    pub fn filter(&self) -> ProximityFilter {
        ProximityFilter::new(self.location, self.now, self.radius_km)
    }
}

/// Sizing for the concurrent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub workers: usize,
    pub shutdown_deadline: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            workers: SEARCH_POOL_WORKERS,
            shutdown_deadline: POOL_SHUTDOWN_DEADLINE,
        }
    }
}

pub struct SearchAggregator<S: RestaurantStore + 'static> {
    finder: RestaurantFinder<S>,
    pool: PoolSettings,
}

impl<S: RestaurantStore + 'static> Clone for SearchAggregator<S> {
    fn clone(&self) -> Self {
        Self {
            finder: self.finder.clone(),
            pool: self.pool,
        }
    }
}

impl<S: RestaurantStore + 'static> std::fmt::Debug for SearchAggregator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAggregator")
            .field("finder", &self.finder)
            .field("pool", &self.pool)
            .finish()
    }
}

impl<S: RestaurantStore + 'static> SearchAggregator<S> {
    pub fn new(finder: RestaurantFinder<S>) -> Self {
        Self::with_pool(finder, PoolSettings::default())
    }

    pub fn with_pool(finder: RestaurantFinder<S>, pool: PoolSettings) -> Self {
        Self { finder, pool }
    }

    pub fn finder(&self) -> &RestaurantFinder<S> {
        &self.finder
    }

    pub fn pool_settings(&self) -> PoolSettings {
        self.pool
    }

    /// Runs each strategy in turn on the caller's task and concatenates the groups.
    ///
    /// No dedup across groups. A failing strategy is logged and contributes nothing.
    #[instrument(skip(self, query), fields(term = %query.term))]
    pub async fn search_sequential(&self, query: &SearchQuery) -> Vec<RestaurantView> {
        if query.term.is_empty() {
            return Vec::new();
        }

        let filter = query.filter();
        let mut merged = Vec::new();
        for strategy in SearchStrategy::ALL {
            match self.finder.find(strategy, &query.term, &filter).await {
                Ok(group) => merged.extend(group),
                Err(e) => warn!(strategy = %strategy, error = %e, "Search strategy failed, skipping"),
            }
        }

        debug!(results = merged.len(), "Sequential search complete");
        merged
    }

    /// Runs every strategy on a bounded pool and merges in strategy order.
    ///
    /// Any strategy failure (or task panic) fails the whole search. The pool is torn down
    /// before returning, aborting stragglers once the shutdown deadline passes.
    #[instrument(skip(self, query), fields(term = %query.term, workers = self.pool.workers))]
    pub async fn search_concurrent(&self, query: &SearchQuery) -> SearchResult<Vec<RestaurantView>> {
        if query.term.is_empty() {
            return Ok(Vec::new());
        }

        let mut pool = WorkerPool::new("search", self.pool.workers);
        let handles: Vec<_> = SearchStrategy::ALL
            .into_iter()
            .map(|strategy| {
                let finder = self.finder.clone();
                let term = query.term.clone();
                let filter = query.filter();
                let handle = pool.submit(async move { finder.find(strategy, &term, &filter).await });
                (strategy, handle)
            })
            .collect();

        let merged = Self::collect(handles).await;
        pool.shutdown(self.pool.shutdown_deadline).await;

        if let Ok(results) = &merged {
            debug!(results = results.len(), "Concurrent search complete");
        }
        merged
    }

    /// Joins handles in submission order, stopping at the first failure.
    async fn collect(handles: Vec<StrategyHandle>) -> SearchResult<Vec<RestaurantView>> {
        let mut merged = Vec::new();
        for (strategy, handle) in handles {
            let group = handle
                .join()
                .await?
                .map_err(|source| SearchError::StrategyFailed { strategy, source })?;
            merged.extend(group);
        }
        Ok(merged)
    }
}

/// [`SearchAggregator::search_sequential`] over a shared store.
pub async fn search_sequential<S: RestaurantStore + 'static>(
    store: Arc<S>,
    query: &SearchQuery,
) -> Vec<RestaurantView> {
    SearchAggregator::new(RestaurantFinder::new(store))
        .search_sequential(query)
        .await
}

/// [`SearchAggregator::search_concurrent`] over a shared store with the default pool.
pub async fn search_concurrent<S: RestaurantStore + 'static>(
    store: Arc<S>,
    query: &SearchQuery,
) -> SearchResult<Vec<RestaurantView>> {
    SearchAggregator::new(RestaurantFinder::new(store))
        .search_concurrent(query)
        .await
}
