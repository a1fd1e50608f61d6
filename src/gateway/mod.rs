//! HTTP gateway (Axum) over [`RestaurantService`](crate::service::RestaurantService).

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::get_restaurants_handler;
pub use state::{Clock, HandlerState, local_time_of_day};

use crate::cache::{CacheBackend, NEARBITE_STATUS_HEADER, NEARBITE_STATUS_HEALTHY};
use crate::store::RestaurantStore;

pub fn create_router_with_state<C, S>(state: HandlerState<C, S>) -> Router
where
    C: CacheBackend + 'static,
    S: RestaurantStore + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/v1/restaurants", get(get_restaurants_handler::<C, S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        NEARBITE_STATUS_HEADER,
        HeaderValue::from_static(NEARBITE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}
