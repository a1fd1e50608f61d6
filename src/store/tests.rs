use std::io::Write;
use std::time::Duration;

use super::*;
use crate::model::fixtures::{item, location, menu, restaurant};

fn seeded_store() -> InMemoryStore {
    let origin = location(12.95, 77.63);

    let mut dosa = restaurant("r1", "Dosa Corner", origin);
    dosa.attributes = vec!["South Indian".to_string(), "Vegetarian".to_string()];
    let mut tandoor = restaurant("r2", "Tandoor House", origin);
    tandoor.attributes = vec!["North Indian".to_string()];
    let plain = restaurant("r3", "Plain Cafe", origin);

    InMemoryStore::from_catalog(Catalog {
        restaurants: vec![dosa, tandoor, plain],
        menus: vec![
            menu("r1", vec![item("i1", "Masala Dosa", &["Spicy", "Veg"])]),
            menu(
                "r2",
                vec![
                    item("i2", "Butter Naan", &["Veg"]),
                    item("i3", "Chicken Tikka", &["Spicy"]),
                ],
            ),
        ],
        items: vec![
            item("i1", "Masala Dosa", &["Spicy", "Veg"]),
            item("i2", "Butter Naan", &["Veg"]),
            item("i3", "Chicken Tikka", &["Spicy"]),
        ],
    })
}

fn ids(records: &[crate::model::RestaurantRecord]) -> Vec<&str> {
    let mut ids: Vec<_> = records.iter().map(|r| r.restaurant_id.as_str()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_matcher_exact_membership() {
    let matcher = AttributeMatcher::new("South Indian");
    assert!(matcher.matches(&["South Indian".to_string()]));
    assert!(!matcher.matches(&[]));
}

#[test]
fn test_matcher_case_insensitive_substring() {
    let matcher = AttributeMatcher::new("indian");
    assert!(matcher.matches(&["North Indian".to_string()]));
    assert!(matcher.matches(&["INDIAN".to_string()]));
    assert!(!matcher.matches(&["Chinese".to_string()]));
}

#[test]
fn test_matcher_regex_term() {
    let matcher = AttributeMatcher::new("^(north|south) ");
    assert!(matcher.matches(&["South Indian".to_string()]));
    assert!(!matcher.matches(&["Indian South".to_string()]));
}

#[test]
fn test_matcher_invalid_regex_falls_back_to_literal() {
    let matcher = AttributeMatcher::new("c++(");
    assert!(matcher.matches(&["Loves C++( a lot".to_string()]));
    assert!(!matcher.matches(&["C plus plus".to_string()]));
    assert_eq!(matcher.term(), "c++(");
}

#[tokio::test]
async fn test_find_by_name_is_exact() {
    let store = seeded_store();

    let found = store.find_restaurants_by_name("Dosa Corner").await.unwrap();
    assert_eq!(ids(&found), ["r1"]);

    let none = store.find_restaurants_by_name("dosa corner").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_find_by_attribute() {
    let store = seeded_store();

    let found = store.find_restaurants_by_attribute("indian").await.unwrap();
    assert_eq!(ids(&found), ["r1", "r2"]);

    let veg = store.find_restaurants_by_attribute("Vegetarian").await.unwrap();
    assert_eq!(ids(&veg), ["r1"]);
}

#[tokio::test]
async fn test_item_resolution_chain() {
    let store = seeded_store();

    let items = store.find_items_by_name("Butter Naan").await.unwrap();
    assert_eq!(items.len(), 1);

    let item_ids: Vec<String> = items.iter().map(|i| i.item_id.clone()).collect();
    let menus = store.find_menus_by_item_ids(&item_ids).await.unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].restaurant_id, "r2");

    let spicy = store.find_items_by_attribute("spicy").await.unwrap();
    assert_eq!(spicy.len(), 2);
}

#[tokio::test]
async fn test_find_by_ids_deduplicates_and_ignores_unknown() {
    let store = seeded_store();
    let wanted = vec!["r2".to_string(), "r2".to_string(), "missing".to_string()];

    let found = store.find_restaurants_by_ids(&wanted).await.unwrap();
    assert_eq!(ids(&found), ["r2"]);

    assert!(store.find_restaurants_by_ids(&[]).await.unwrap().is_empty());
    assert!(store.find_menus_by_item_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upserts_replace_by_public_id() {
    let store = seeded_store();
    assert_eq!(store.restaurant_count(), 3);

    let mut renamed = restaurant("r3", "Fancy Cafe", location(12.95, 77.63));
    renamed.attributes = vec!["Cafe".to_string()];
    store.upsert_restaurant(renamed);
    store.upsert_restaurant(restaurant("r4", "New Place", location(12.9, 77.6)));

    assert_eq!(store.restaurant_count(), 4);
    assert!(store.find_restaurants_by_name("Plain Cafe").await.unwrap().is_empty());
    assert_eq!(
        ids(&store.find_restaurants_by_name("Fancy Cafe").await.unwrap()),
        ["r3"]
    );

    store.upsert_item(item("i2", "Garlic Naan", &["Veg"]));
    store.upsert_menu(menu("r4", vec![item("i2", "Garlic Naan", &["Veg"])]));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 3);
    assert_eq!(snapshot.menus.len(), 3);
}

#[test]
fn test_load_json_catalog() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(
        file,
        r#"{{
            "restaurants": [{{
                "restaurantId": "10", "name": "A2B", "city": "Hsr Layout",
                "imageUrl": "www.google.com", "latitude": 20.027, "longitude": 30.0,
                "opensAt": "18:00", "closesAt": "23:00", "attributes": ["Tamil"]
            }}],
            "items": [{{ "itemId": "i1", "name": "Idli", "attributes": [] }}]
        }}"#
    )
    .expect("write");
    file.flush().expect("flush");

    let store = InMemoryStore::load_json(file.path()).expect("should load");
    let snapshot = store.snapshot();
    assert_eq!(snapshot.restaurants.len(), 1);
    assert_eq!(snapshot.items.len(), 1);
    assert!(snapshot.menus.is_empty());
}

#[test]
fn test_load_json_errors() {
    let missing = InMemoryStore::load_json(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(matches!(missing, Err(StoreError::CatalogIo { .. })));

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"{ not json").expect("write");
    file.flush().expect("flush");
    let garbage = InMemoryStore::load_json(file.path());
    assert!(matches!(garbage, Err(StoreError::CatalogParse { .. })));
}

#[tokio::test]
async fn test_mock_counts_and_fails() {
    let store = MockRestaurantStore::new();
    store
        .inner()
        .upsert_restaurant(restaurant("r1", "One", location(1.0, 1.0)));

    assert_eq!(store.find_all().await.unwrap().len(), 1);
    assert_eq!(store.calls(StoreOperation::FindAll), 1);

    store.fail_on(StoreOperation::FindAll);
    let err = store.find_all().await.unwrap_err();
    assert!(err.to_string().contains("find_all"));
    assert_eq!(store.calls(StoreOperation::FindAll), 2);

    store.clear_failures();
    assert!(store.find_all().await.is_ok());
    assert_eq!(store.total_calls(), 3);

    store.reset_calls();
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_mock_delay_applies() {
    let store = MockRestaurantStore::new();
    store.delay(StoreOperation::RestaurantsByName, Duration::from_millis(30));

    let start = std::time::Instant::now();
    let _ = store.find_restaurants_by_name("x").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
}
