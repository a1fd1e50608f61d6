use chrono::NaiveTime;

use super::hours::is_open;
use crate::geo::{Location, distance_km};
use crate::model::{RestaurantRecord, RestaurantView};

/// Returns `true` if `record` is open at `now` and strictly closer than `radius_km`.
///
/// The hours check runs first since it is cheaper than the distance.
pub fn is_eligible(
    record: &RestaurantRecord,
    now: NaiveTime,
    query_location: Location,
    radius_km: f64,
) -> bool {
    is_open(now, record.opens_at, record.closes_at)
        && distance_km(query_location, record.location) < radius_km
}

/// [`is_eligible`] bound to one request's location, time and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    location: Location,
    now: NaiveTime,
    radius_km: f64,
}

impl ProximityFilter {
    pub fn new(location: Location, now: NaiveTime, radius_km: f64) -> Self {
        Self {
            location,
            now,
            radius_km,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn now(&self) -> NaiveTime {
        self.now
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[inline]
    pub fn admits(&self, record: &RestaurantRecord) -> bool {
        is_eligible(record, self.now, self.location, self.radius_km)
    }

    /// Keeps eligible records, in input order, projected to views.
    pub fn apply(&self, records: impl IntoIterator<Item = RestaurantRecord>) -> Vec<RestaurantView> {
        records
            .into_iter()
            .filter(|record| self.admits(record))
            .map(RestaurantView::from)
            .collect()
    }
}
