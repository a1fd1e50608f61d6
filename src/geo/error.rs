use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors returned by location construction and geohash encoding.
pub enum GeoError {
    /// Latitude outside `[-90, 90]` or not finite.
    #[error("invalid latitude {value}: must be within [-90, 90]")]
    InvalidLatitude {
        /// Rejected value.
        value: f64,
    },

    /// Longitude outside `[-180, 180]` or not finite.
    #[error("invalid longitude {value}: must be within [-180, 180]")]
    InvalidLongitude {
        /// Rejected value.
        value: f64,
    },

    /// Geohash precision of zero or beyond the encoder limit.
    #[error("invalid geohash precision {precision}: must be within 1..={max}")]
    InvalidPrecision {
        /// Requested precision.
        precision: usize,
        /// Largest supported precision.
        max: usize,
    },

    /// The geohash encoder rejected the input.
    #[error("geohash encoding failed: {reason}")]
    Encoding { reason: String },
}

/// Convenience result type for geo operations.
pub type GeoResult<T> = Result<T, GeoError>;
