//! Search-term aggregation across the four lookup strategies.
//!
//! [`SearchAggregator::search_sequential`] runs on the caller's task and degrades per strategy;
//! [`SearchAggregator::search_concurrent`] fans out on a [`WorkerPool`] and fails as a whole.

pub mod aggregator;
pub mod error;
pub mod pool;


pub use aggregator::{PoolSettings, SearchAggregator, SearchQuery, search_concurrent, search_sequential};
pub use error::{PoolError, PoolResult, SearchError, SearchResult};
pub use pool::{ShutdownOutcome, TaskHandle, WorkerPool};
