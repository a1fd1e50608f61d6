//! Record builders shared by unit tests, integration tests and demos.

use chrono::NaiveTime;

use super::{ItemRecord, MenuRecord, RestaurantRecord};
use crate::constants::EARTH_RADIUS_KM;
use crate::geo::Location;

/// Builds a time of day, panicking on invalid input.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Builds a location, panicking on invalid input.
pub fn location(latitude: f64, longitude: f64) -> Location {
    Location::new(latitude, longitude).expect("valid location")
}

/// The point `km` kilometres due north of `origin` (along its meridian).
pub fn north_of(origin: Location, km: f64) -> Location {
    let delta = (km / EARTH_RADIUS_KM).to_degrees();
    location(origin.latitude() + delta, origin.longitude())
}

/// A restaurant open 08:00 to 22:00 with no attributes.
pub fn restaurant(restaurant_id: &str, name: &str, at: Location) -> RestaurantRecord {
    RestaurantRecord {
        id: format!("record-{restaurant_id}"),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        city: "Bengaluru".to_string(),
        image_url: format!("https://img.example/{restaurant_id}.png"),
        location: at,
        opens_at: time(8, 0),
        closes_at: time(22, 0),
        attributes: Vec::new(),
    }
}

pub fn item(item_id: &str, name: &str, attributes: &[&str]) -> ItemRecord {
    ItemRecord {
        item_id: item_id.to_string(),
        name: name.to_string(),
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn menu(restaurant_id: &str, items: Vec<ItemRecord>) -> MenuRecord {
    MenuRecord {
        restaurant_id: restaurant_id.to_string(),
        items,
    }
}
