//! Basic close-by and search flow over an in-memory catalog.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveTime;
use nearbite::{
    GetRestaurantsRequest, InMemoryStore, Location, MokaCacheBackend, RestaurantRecord,
    RestaurantService,
};

fn record(restaurant_id: &str, name: &str, latitude: f64, longitude: f64) -> Result<RestaurantRecord> {
    Ok(RestaurantRecord {
        id: format!("demo-{restaurant_id}"),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        city: "Bengaluru".to_string(),
        image_url: String::new(),
        location: Location::new(latitude, longitude)?,
        opens_at: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        closes_at: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
        attributes: vec!["South Indian".to_string()],
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let store = Arc::new(InMemoryStore::new());
    store.upsert_restaurant(record("1", "Dosa Corner", 12.968, 77.63)?);
    store.upsert_restaurant(record("2", "Far Away Cafe", 13.2, 77.63)?);

    let service = RestaurantService::new(Arc::new(MokaCacheBackend::new()), store);
    let now = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default();

    let request = GetRestaurantsRequest::new(12.95, 77.63);
    for _ in 0..2 {
        let response = service.find_all_restaurants_close_by(&request, now).await?;
        println!(
            "close by: {} restaurant(s), cache {:?}",
            response.len(),
            response.cache_status
        );
    }

    let search = request.with_search("south");
    let response = service
        .find_restaurants_by_search_query_concurrent(&search, now)
        .await?;
    for view in &response.restaurants {
        println!("search hit: {} ({})", view.name, view.restaurant_id);
    }

    Ok(())
}
