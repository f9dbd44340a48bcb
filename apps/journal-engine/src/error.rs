//! Top-level error type for the journal engine.

use thiserror::Error;

use crate::models::ValidationError;
use crate::store::StoreError;

/// Umbrella error for journal operations.
///
/// Aggregation and query operations never fail on well-formed input, so
/// only input validation and persistence appear here.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Raw trade input violated a constraint; the store was not touched.
    #[error("invalid trade input: {0}")]
    Validation(#[from] ValidationError),

    /// The durable store failed or is corrupt.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
