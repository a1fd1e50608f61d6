//! Locations, great-circle distance and geohash cell keys.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{GeoError, GeoResult};

use ::geohash::Coord;
use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_KM, MAX_GEOHASH_PRECISION};

/// A validated latitude/longitude pair in degrees.
///
/// Construct with [`Location::new`]; deserialization applies the same range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationParts")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct LocationParts {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LocationParts> for Location {
    type Error = GeoError;

    fn try_from(parts: LocationParts) -> Result<Self, Self::Error> {
        Self::new(parts.latitude, parts.longitude)
    }
}

impl Location {
    /// Creates a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two locations (haversine), in kilometres.
pub fn distance_km(a: Location, b: Location) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Encodes `location` as a base32 geohash of `precision` characters.
pub fn geohash(location: Location, precision: usize) -> GeoResult<String> {
    if precision == 0 || precision > MAX_GEOHASH_PRECISION {
        return Err(GeoError::InvalidPrecision {
            precision,
            max: MAX_GEOHASH_PRECISION,
        });
    }

    let coord = Coord {
        x: location.longitude,
        y: location.latitude,
    };
    ::geohash::encode(coord, precision).map_err(|e| GeoError::Encoding {
        reason: e.to_string(),
    })
}
