//! Backing-store lookup facade.
//!
//! Each strategy resolves candidates through the store and then runs them through the
//! request's [`ProximityFilter`]. The "all" scan feeds the geo cache; the four search
//! strategies feed the aggregator.


use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::model::{ItemRecord, RestaurantRecord, RestaurantView};
use crate::policy::ProximityFilter;
use crate::store::{RestaurantStore, StoreResult};

/// One of the independent search paths a term fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    Name,
    Attribute,
    ItemName,
    ItemAttribute,
}

impl SearchStrategy {
    /// Every strategy, in merge order.
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::Name,
        SearchStrategy::Attribute,
        SearchStrategy::ItemName,
        SearchStrategy::ItemAttribute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Name => "name",
            SearchStrategy::Attribute => "attribute",
            SearchStrategy::ItemName => "item_name",
            SearchStrategy::ItemAttribute => "item_attribute",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RestaurantFinder<S: RestaurantStore> {
    store: Arc<S>,
}

impl<S: RestaurantStore> Clone for RestaurantFinder<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RestaurantStore> std::fmt::Debug for RestaurantFinder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantFinder")
            .field("store_refs", &Arc::strong_count(&self.store))
            .finish()
    }
}

impl<S: RestaurantStore> RestaurantFinder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Full scan, filtered.
    pub async fn find_all_nearby(&self, filter: &ProximityFilter) -> StoreResult<Vec<RestaurantView>> {
        let records = self.store.find_all().await?;
        let scanned = records.len();
        let views = filter.apply(records);
        debug!(scanned, eligible = views.len(), "Full scan filtered");
        Ok(views)
    }

    /// Runs a single strategy for `term`.
    pub async fn find(
        &self,
        strategy: SearchStrategy,
        term: &str,
        filter: &ProximityFilter,
    ) -> StoreResult<Vec<RestaurantView>> {
        let candidates = match strategy {
            SearchStrategy::Name => self.store.find_restaurants_by_name(term).await?,
            SearchStrategy::Attribute => self.store.find_restaurants_by_attribute(term).await?,
            SearchStrategy::ItemName => {
                let items = self.store.find_items_by_name(term).await?;
                self.restaurants_serving(items).await?
            }
            SearchStrategy::ItemAttribute => {
                let items = self.store.find_items_by_attribute(term).await?;
                self.restaurants_serving(items).await?
            }
        };

        let candidate_count = candidates.len();
        let views = filter.apply(candidates);
        debug!(
            strategy = %strategy,
            candidates = candidate_count,
            eligible = views.len(),
            "Strategy resolved"
        );
        Ok(views)
    }

    pub async fn find_by_name(
        &self,
        term: &str,
        filter: &ProximityFilter,
    ) -> StoreResult<Vec<RestaurantView>> {
        self.find(SearchStrategy::Name, term, filter).await
    }

    pub async fn find_by_attribute(
        &self,
        term: &str,
        filter: &ProximityFilter,
    ) -> StoreResult<Vec<RestaurantView>> {
        self.find(SearchStrategy::Attribute, term, filter).await
    }

    pub async fn find_by_item_name(
        &self,
        term: &str,
        filter: &ProximityFilter,
    ) -> StoreResult<Vec<RestaurantView>> {
        self.find(SearchStrategy::ItemName, term, filter).await
    }

    pub async fn find_by_item_attribute(
        &self,
        term: &str,
        filter: &ProximityFilter,
    ) -> StoreResult<Vec<RestaurantView>> {
        self.find(SearchStrategy::ItemAttribute, term, filter).await
    }

    /// items -> menus listing them -> owning restaurants. Stops early on any empty stage.
    async fn restaurants_serving(&self, items: Vec<ItemRecord>) -> StoreResult<Vec<RestaurantRecord>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<String> = items.into_iter().map(|item| item.item_id).collect();
        let menus = self.store.find_menus_by_item_ids(&item_ids).await?;
        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let restaurant_ids: Vec<String> = menus
            .into_iter()
            .map(|menu| menu.restaurant_id)
            .filter(|id| seen.insert(id.clone()))
            .collect();

        self.store.find_restaurants_by_ids(&restaurant_ids).await
    }
}
