//! Backing-store contract and the in-memory catalog implementation.
//!
//! Every query returns an unordered candidate set. An empty set is the "not found" answer;
//! errors are reserved for the store itself failing.

pub mod error;
pub mod matcher;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use matcher::AttributeMatcher;
pub use memory::{Catalog, InMemoryStore};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRestaurantStore;

use std::future::Future;

use crate::model::{ItemRecord, MenuRecord, RestaurantRecord};

/// Names the store queries, for logging and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    FindAll,
    RestaurantsByName,
    RestaurantsByAttribute,
    ItemsByName,
    ItemsByAttribute,
    MenusByItemIds,
    RestaurantsByIds,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::FindAll => "find_all",
            StoreOperation::RestaurantsByName => "restaurants_by_name",
            StoreOperation::RestaurantsByAttribute => "restaurants_by_attribute",
            StoreOperation::ItemsByName => "items_by_name",
            StoreOperation::ItemsByAttribute => "items_by_attribute",
            StoreOperation::MenusByItemIds => "menus_by_item_ids",
            StoreOperation::RestaurantsByIds => "restaurants_by_ids",
        }
    }
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to restaurants, menus and items.
pub trait RestaurantStore: Send + Sync {
    /// Every restaurant record.
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;

    /// Restaurants whose name equals `name` exactly.
    fn find_restaurants_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;

    /// Restaurants whose attributes match `term` (see [`AttributeMatcher`]).
    fn find_restaurants_by_attribute(
        &self,
        term: &str,
    ) -> impl Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;

    /// Items whose name equals `name` exactly.
    fn find_items_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = StoreResult<Vec<ItemRecord>>> + Send;

    /// Items whose attributes match `term` (see [`AttributeMatcher`]).
    fn find_items_by_attribute(
        &self,
        term: &str,
    ) -> impl Future<Output = StoreResult<Vec<ItemRecord>>> + Send;

    /// Menus listing at least one of `item_ids`.
    fn find_menus_by_item_ids(
        &self,
        item_ids: &[String],
    ) -> impl Future<Output = StoreResult<Vec<MenuRecord>>> + Send;

    /// Restaurants whose `restaurant_id` is in `restaurant_ids`, each at most once.
    fn find_restaurants_by_ids(
        &self,
        restaurant_ids: &[String],
    ) -> impl Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;
}
