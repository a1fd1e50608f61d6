use thiserror::Error;

use crate::finder::SearchStrategy;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("pool task panicked: {message}")]
    TaskPanicked { message: String },

    #[error("pool task was cancelled before reporting a result")]
    TaskCancelled,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search strategy '{strategy}' failed: {source}")]
    StrategyFailed {
        strategy: SearchStrategy,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Pool(#[from] PoolError),
}

pub type PoolResult<T> = Result<T, PoolError>;

pub type SearchResult<T> = Result<T, SearchError>;
