use std::collections::HashSet;
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::matcher::AttributeMatcher;
use super::RestaurantStore;
use crate::model::{ItemRecord, MenuRecord, RestaurantRecord};

/// Serializable snapshot of everything the store holds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<RestaurantRecord>,
    #[serde(default)]
    pub menus: Vec<MenuRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// A [`RestaurantStore`] over an in-process [`Catalog`].
///
/// Reads clone matching records out from under a read lock. The `upsert_*` methods are the
/// data-loading side and replace records by their public id.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Loads a catalog from a JSON file.
    pub fn load_json(path: &Path) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Catalog =
            serde_json::from_str(&raw).map_err(|source| StoreError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            restaurants = catalog.restaurants.len(),
            menus = catalog.menus.len(),
            items = catalog.items.len(),
            "Catalog loaded"
        );

        Ok(Self::from_catalog(catalog))
    }

    pub fn upsert_restaurant(&self, record: RestaurantRecord) {
        let mut catalog = self.catalog.write();
        let existing = catalog
            .restaurants
            .iter()
            .position(|r| r.restaurant_id == record.restaurant_id);
        match existing {
            Some(index) => catalog.restaurants[index] = record,
            None => catalog.restaurants.push(record),
        }
    }

    pub fn upsert_menu(&self, menu: MenuRecord) {
        let mut catalog = self.catalog.write();
        let existing = catalog
            .menus
            .iter()
            .position(|m| m.restaurant_id == menu.restaurant_id);
        match existing {
            Some(index) => catalog.menus[index] = menu,
            None => catalog.menus.push(menu),
        }
    }

    pub fn upsert_item(&self, item: ItemRecord) {
        let mut catalog = self.catalog.write();
        let existing = catalog.items.iter().position(|i| i.item_id == item.item_id);
        match existing {
            Some(index) => catalog.items[index] = item,
            None => catalog.items.push(item),
        }
    }

    pub fn restaurant_count(&self) -> usize {
        self.catalog.read().restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.read().restaurants.is_empty()
    }

    /// Clones the current catalog.
    pub fn snapshot(&self) -> Catalog {
        self.catalog.read().clone()
    }

    fn restaurants_where(
        &self,
        predicate: impl Fn(&RestaurantRecord) -> bool,
    ) -> Vec<RestaurantRecord> {
        self.catalog
            .read()
            .restaurants
            .iter()
            .filter(|r| predicate(*r))
            .cloned()
            .collect()
    }

    fn items_where(&self, predicate: impl Fn(&ItemRecord) -> bool) -> Vec<ItemRecord> {
        self.catalog
            .read()
            .items
            .iter()
            .filter(|i| predicate(*i))
            .cloned()
            .collect()
    }
}

impl RestaurantStore for InMemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<RestaurantRecord>> {
        Ok(self.catalog.read().restaurants.clone())
    }

    async fn find_restaurants_by_name(&self, name: &str) -> StoreResult<Vec<RestaurantRecord>> {
        Ok(self.restaurants_where(|r| r.name == name))
    }

    async fn find_restaurants_by_attribute(
        &self,
        term: &str,
    ) -> StoreResult<Vec<RestaurantRecord>> {
        let matcher = AttributeMatcher::new(term);
        Ok(self.restaurants_where(|r| matcher.matches(&r.attributes)))
    }

    async fn find_items_by_name(&self, name: &str) -> StoreResult<Vec<ItemRecord>> {
        Ok(self.items_where(|i| i.name == name))
    }

    async fn find_items_by_attribute(&self, term: &str) -> StoreResult<Vec<ItemRecord>> {
        let matcher = AttributeMatcher::new(term);
        Ok(self.items_where(|i| matcher.matches(&i.attributes)))
    }

    async fn find_menus_by_item_ids(&self, item_ids: &[String]) -> StoreResult<Vec<MenuRecord>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .catalog
            .read()
            .menus
            .iter()
            .filter(|m| m.contains_any_item(item_ids))
            .cloned()
            .collect())
    }

    async fn find_restaurants_by_ids(
        &self,
        restaurant_ids: &[String],
    ) -> StoreResult<Vec<RestaurantRecord>> {
        if restaurant_ids.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: HashSet<&str> = restaurant_ids.iter().map(String::as_str).collect();
        Ok(self.restaurants_where(|r| wanted.contains(r.restaurant_id.as_str())))
    }
}
