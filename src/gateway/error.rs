use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::NEARBITE_STATUS_HEADER;
use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("lookup failed: {0}")]
    LookupFailed(String),

    #[error("search failed: {0}")]
    SearchFailed(String),
}

impl From<ServiceError> for GatewayError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidRequest { reason } => GatewayError::InvalidRequest(reason),
            ServiceError::Search(e) => GatewayError::SearchFailed(e.to_string()),
            err @ ServiceError::Store(_) => GatewayError::LookupFailed(err.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, nearbite_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::LookupFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "lookup_error"),
            GatewayError::SearchFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "search_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            NEARBITE_STATUS_HEADER,
            HeaderValue::from_static(nearbite_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
