//! `TradeStore` port and adapters.
//!
//! The store is the sole source of truth for the record set; it holds no
//! business logic beyond deriving a record's metrics once at creation.

use thiserror::Error;

use crate::models::{Trade, TradeDraft};

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

/// Errors from the durable record store.
///
/// A corrupt payload is reported, never repaired or erased.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be decoded.
    #[error("corrupt store payload: {0}")]
    Corrupt(String),
}

/// Durable keyed collection of trade records.
///
/// Mutations are atomic from the caller's perspective: a read immediately
/// following a completed `create` or `delete` observes it.
pub trait TradeStore {
    /// All persisted trades. Callers must not rely on the returned order.
    fn list(&self) -> Result<Vec<Trade>, StoreError>;

    /// Derive metrics, assign a fresh unique id, persist, and return the
    /// full record.
    fn create(&self, draft: TradeDraft) -> Result<Trade, StoreError>;

    /// Remove the record with this id. Returns `Ok(false)` (a reported
    /// no-op, not an error) if the id is unknown.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
