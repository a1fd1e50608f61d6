//! Request/response shapes shared by the service and the HTTP gateway.

use serde::{Deserialize, Serialize};

use super::error::{ServiceError, ServiceResult};
use crate::cache::CacheStatus;
use crate::geo::Location;
use crate::model::RestaurantView;

/// `GET /v1/restaurants?latitude=28.49&longitude=77.53&searchFor=tamil`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRestaurantsRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_for: Option<String>,
}

impl GetRestaurantsRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            search_for: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_for = Some(term.into());
        self
    }

    /// Checks the coordinate ranges (latitude ±90, longitude ±180).
    pub fn location(&self) -> ServiceResult<Location> {
        Location::new(self.latitude, self.longitude).map_err(|e| ServiceError::InvalidRequest {
            reason: e.to_string(),
        })
    }

    /// The search term, if one was sent.
    pub fn search_term(&self) -> Option<&str> {
        self.search_for.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRestaurantsResponse {
    pub restaurants: Vec<RestaurantView>,
    /// Set when the list came through the geo cache path.
    #[serde(skip)]
    pub cache_status: Option<CacheStatus>,
}

impl GetRestaurantsResponse {
    pub fn new(restaurants: Vec<RestaurantView>) -> Self {
        Self {
            restaurants,
            cache_status: None,
        }
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
