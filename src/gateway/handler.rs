use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use super::error::GatewayError;
use super::state::HandlerState;
use crate::cache::{CacheBackend, NEARBITE_CACHE_HEADER, NEARBITE_STATUS_HEADER, NEARBITE_STATUS_HEALTHY};
use crate::service::GetRestaurantsRequest;
use crate::store::RestaurantStore;

/// `GET /v1/restaurants?latitude=..&longitude=..[&searchFor=..]`
#[instrument(skip(state, query))]
pub async fn get_restaurants_handler<C, S>(
    State(state): State<HandlerState<C, S>>,
    query: Result<Query<GetRestaurantsRequest>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    C: CacheBackend + 'static,
    S: RestaurantStore + 'static,
{
    let Query(request) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let now = state.now();
    debug!(?request, %now, "Handling restaurants request");

    let response = state.service.find_restaurants(&request, now).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        NEARBITE_STATUS_HEADER,
        HeaderValue::from_static(NEARBITE_STATUS_HEALTHY),
    );
    if let Some(status) = response.cache_status {
        headers.insert(
            NEARBITE_CACHE_HEADER,
            HeaderValue::from_static(status.as_header_value()),
        );
    }

    Ok((StatusCode::OK, headers, Json(response)).into_response())
}
