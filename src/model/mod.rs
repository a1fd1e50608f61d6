//! Restaurant, menu and item records plus the view returned to callers.
//!
//! Records are the backing-store shape; [`RestaurantView`] is the projection every response
//! uses. Times of day travel as `"HH:MM"` strings, with seconds appended only when non-zero.

#[cfg(any(test, feature = "mock"))]
pub mod fixtures;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::geo::Location;

/// A restaurant as held by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    /// Store-internal identifier. Never exposed in views.
    #[serde(default = "generate_record_id")]
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub city: String,
    pub image_url: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(with = "time_of_day")]
    pub opens_at: NaiveTime,
    #[serde(with = "time_of_day")]
    pub closes_at: NaiveTime,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// The caller-facing restaurant shape: a [`RestaurantRecord`] without its internal id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantView {
    pub restaurant_id: String,
    pub name: String,
    pub city: String,
    pub image_url: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(with = "time_of_day")]
    pub opens_at: NaiveTime,
    #[serde(with = "time_of_day")]
    pub closes_at: NaiveTime,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl From<&RestaurantRecord> for RestaurantView {
    fn from(record: &RestaurantRecord) -> Self {
        Self {
            restaurant_id: record.restaurant_id.clone(),
            name: record.name.clone(),
            city: record.city.clone(),
            image_url: record.image_url.clone(),
            location: record.location,
            opens_at: record.opens_at,
            closes_at: record.closes_at,
            attributes: record.attributes.clone(),
        }
    }
}

impl From<RestaurantRecord> for RestaurantView {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            restaurant_id: record.restaurant_id,
            name: record.name,
            city: record.city,
            image_url: record.image_url,
            location: record.location,
            opens_at: record.opens_at,
            closes_at: record.closes_at,
            attributes: record.attributes,
        }
    }
}

/// A menu entry for a single restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub restaurant_id: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl MenuRecord {
    /// Returns `true` if any item on this menu has one of `item_ids`.
    pub fn contains_any_item(&self, item_ids: &[String]) -> bool {
        self.items
            .iter()
            .any(|item| item_ids.iter().any(|id| id == &item.item_id))
    }
}

/// A dish that can appear on menus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

fn generate_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Parses `"HH:MM"`, `"HH:MM:SS"` or `"HH:MM:SS.fff"`.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
}

pub(crate) mod time_of_day {
    use chrono::{NaiveTime, Timelike};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTES: &str = "%H:%M";
    const SECONDS: &str = "%H:%M:%S%.f";

    /// Writes the shortest form that parses back to the same time.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        let format = if time.second() == 0 && time.nanosecond() == 0 {
            MINUTES
        } else {
            SECONDS
        };
        serializer.collect_str(&time.format(format))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw)
            .map_err(|e| D::Error::custom(format!("invalid time of day '{raw}': {e}")))
    }
}
