//! Cache payload codec.
//!
//! Cache values are opaque strings to the backend; this module owns their format (a JSON array
//! of [`RestaurantView`]).

use thiserror::Error;

use crate::model::RestaurantView;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to encode cache payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode cache payload: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type PayloadResult<T> = Result<T, PayloadError>;

pub struct PayloadEncoder;

impl PayloadEncoder {
    pub fn encode(views: &[RestaurantView]) -> PayloadResult<String> {
        serde_json::to_string(views).map_err(PayloadError::Encode)
    }
}

pub struct PayloadDecoder;

impl PayloadDecoder {
    pub fn decode(input: &str) -> PayloadResult<Vec<RestaurantView>> {
        serde_json::from_str(input).map_err(PayloadError::Decode)
    }
}
