use thiserror::Error;

use crate::cache::CacheError;
use crate::search::SearchError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("restaurant lookup failed: {0}")]
    Store(#[source] StoreError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ServiceError {
    /// Whether the caller sent bad input (as opposed to an internal failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::InvalidRequest { .. })
    }
}

impl From<CacheError> for ServiceError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Store(source) => ServiceError::Store(source),
            CacheError::Key(source) => ServiceError::InvalidRequest {
                reason: source.to_string(),
            },
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
