//! Instrumented store for tests: call counting, failure injection and per-operation delays.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use parking_lot::Mutex;

use super::error::{StoreError, StoreResult};
use super::memory::{Catalog, InMemoryStore};
use super::{RestaurantStore, StoreOperation};
use crate::model::{ItemRecord, MenuRecord, RestaurantRecord};

#[derive(Debug, Default)]
pub struct MockRestaurantStore {
    inner: InMemoryStore,
    calls: Mutex<HashMap<StoreOperation, usize>>,
    failing: Mutex<HashSet<StoreOperation>>,
    delays: Mutex<HashMap<StoreOperation, Duration>>,
}

impl MockRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: InMemoryStore::from_catalog(catalog),
            ..Default::default()
        }
    }

    /// The wrapped store, for seeding records.
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    /// Makes every later call to `operation` fail.
    pub fn fail_on(&self, operation: StoreOperation) {
        self.failing.lock().insert(operation);
    }

    pub fn clear_failures(&self) {
        self.failing.lock().clear();
    }

    /// Delays every later call to `operation` by `delay` before it runs.
    pub fn delay(&self, operation: StoreOperation, delay: Duration) {
        self.delays.lock().insert(operation, delay);
    }

    /// Number of calls made to `operation`.
    pub fn calls(&self, operation: StoreOperation) -> usize {
        self.calls.lock().get(&operation).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    async fn enter(&self, operation: StoreOperation) -> StoreResult<()> {
        *self.calls.lock().entry(operation).or_insert(0) += 1;
        let delay = self.delays.lock().get(&operation).copied();
        let failing = self.failing.lock().contains(&operation);

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if failing {
            return Err(StoreError::QueryFailed {
                operation: operation.as_str(),
                reason: "injected failure".to_string(),
            });
        }

        Ok(())
    }
}

impl RestaurantStore for MockRestaurantStore {
    async fn find_all(&self) -> StoreResult<Vec<RestaurantRecord>> {
        self.enter(StoreOperation::FindAll).await?;
        self.inner.find_all().await
    }

    async fn find_restaurants_by_name(&self, name: &str) -> StoreResult<Vec<RestaurantRecord>> {
        self.enter(StoreOperation::RestaurantsByName).await?;
        self.inner.find_restaurants_by_name(name).await
    }

    async fn find_restaurants_by_attribute(
        &self,
        term: &str,
    ) -> StoreResult<Vec<RestaurantRecord>> {
        self.enter(StoreOperation::RestaurantsByAttribute).await?;
        self.inner.find_restaurants_by_attribute(term).await
    }

    async fn find_items_by_name(&self, name: &str) -> StoreResult<Vec<ItemRecord>> {
        self.enter(StoreOperation::ItemsByName).await?;
        self.inner.find_items_by_name(name).await
    }

    async fn find_items_by_attribute(&self, term: &str) -> StoreResult<Vec<ItemRecord>> {
        self.enter(StoreOperation::ItemsByAttribute).await?;
        self.inner.find_items_by_attribute(term).await
    }

    async fn find_menus_by_item_ids(&self, item_ids: &[String]) -> StoreResult<Vec<MenuRecord>> {
        self.enter(StoreOperation::MenusByItemIds).await?;
        self.inner.find_menus_by_item_ids(item_ids).await
    }

    async fn find_restaurants_by_ids(
        &self,
        restaurant_ids: &[String],
    ) -> StoreResult<Vec<RestaurantRecord>> {
        self.enter(StoreOperation::RestaurantsByIds).await?;
        self.inner.find_restaurants_by_ids(restaurant_ids).await
    }
}
