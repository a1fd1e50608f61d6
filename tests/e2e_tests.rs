//! End-to-end HTTP tests.

mod common;

use chrono::NaiveTime;
use serde_json::Value;

use common::harness::{TestServerConfig, spawn_test_server};
use nearbite::store::StoreOperation;
use nearbite::{NEARBITE_CACHE_HEADER, SearchMode, ServiceSettings};

fn half_past_nine() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).expect("valid time")
}

fn eight_pm() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 0, 0).expect("valid time")
}

fn ids(body: &Value) -> Vec<String> {
    body["restaurants"]
        .as_array()
        .expect("restaurants array")
        .iter()
        .map(|r| r["restaurantId"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let body: Value = reqwest::get(format!("{}/healthz", server.url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_peak_hour_listing_without_cache() {
    let server = spawn_test_server(TestServerConfig {
        cache_available: false,
        clock: half_past_nine,
        ..Default::default()
    })
    .await
    .expect("Server should start");

    let response = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63",
        server.url()
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()[NEARBITE_CACHE_HEADER], "BYPASS");

    // 3 km peak radius: "mid" (4 km) is out, "late" is closed at 09:30.
    let body: Value = response.json().await.unwrap();
    assert_eq!(ids(&body), ["near"]);
    assert_eq!(server.cache.get_calls(), 0);
}

#[tokio::test]
async fn test_listing_is_cached_per_cell() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = reqwest::Client::new();
    let url = format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63",
        server.url()
    );

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.headers()[NEARBITE_CACHE_HEADER], "MISS");
    let first: Value = first.json().await.unwrap();
    assert_eq!(ids(&first), ["near", "mid"]);

    let second = client.get(&url).send().await.unwrap();
    assert_eq!(second.headers()[NEARBITE_CACHE_HEADER], "HIT");
    assert_eq!(second.json::<Value>().await.unwrap(), first);

    assert_eq!(server.store.calls(StoreOperation::FindAll), 1);
    assert_eq!(server.cache.set_calls(), 1);
}

#[tokio::test]
async fn test_search_groups_follow_strategy_order() {
    let server = spawn_test_server(TestServerConfig {
        clock: eight_pm,
        ..Default::default()
    })
    .await
    .expect("Server should start");

    // 20:00 is peak (3 km). Name hits "near" (far copy is out of range), item name hits
    // "near" and "late" through their menus.
    let body: Value = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63&searchFor=Dosa%20Corner",
        server.url()
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    assert_eq!(ids(&body), ["near"]);

    let body: Value = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63&searchFor=Masala%20Dosa",
        server.url()
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    let mut found = ids(&body);
    found.sort();
    assert_eq!(found, ["late", "near"]);
}

#[tokio::test]
async fn test_sequential_mode_tolerates_store_failures() {
    let server = spawn_test_server(TestServerConfig {
        settings: ServiceSettings {
            search_mode: SearchMode::Sequential,
            ..Default::default()
        },
        ..Default::default()
    })
    .await
    .expect("Server should start");
    server.store.fail_on(StoreOperation::ItemsByAttribute);

    let response = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63&searchFor=tamil",
        server.url()
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(ids(&body), ["mid"]);
}

#[tokio::test]
async fn test_concurrent_mode_fails_on_store_failure() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    server.store.fail_on(StoreOperation::ItemsByAttribute);

    let response = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=77.63&searchFor=tamil",
        server.url()
    ))
    .await
    .unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_invalid_longitude_is_rejected() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let response = reqwest::get(format!(
        "{}/v1/restaurants?latitude=12.95&longitude=181",
        server.url()
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(server.store.total_calls(), 0);
}
