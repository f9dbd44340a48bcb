//! Validation + persistence orchestration over a [`TradeStore`].

use tracing::info;

use crate::error::JournalError;
use crate::models::{Trade, TradeDraft};
use crate::store::TradeStore;

/// The journal service: validates raw input, then delegates to the store.
///
/// Validation failures are reported before any store mutation.
pub struct Journal<S: TradeStore> {
    store: S,
}

impl<S: TradeStore> Journal<S> {
    /// Create a journal over a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a draft, derive its metrics, and persist it.
    ///
    /// # Errors
    ///
    /// [`JournalError::Validation`] if the draft violates a constraint (the
    /// store is untouched), or [`JournalError::Store`] if persistence
    /// fails.
    pub fn add(&self, draft: TradeDraft) -> Result<Trade, JournalError> {
        draft.validate()?;
        let trade = self.store.create(draft)?;
        info!(
            id = %trade.id,
            instrument = %trade.instrument,
            outcome = %trade.outcome,
            "trade recorded"
        );
        Ok(trade)
    }

    /// Delete a trade by id. Returns whether a record was removed; an
    /// unknown id is a no-op, not an error.
    pub fn remove(&self, id: &str) -> Result<bool, JournalError> {
        let removed = self.store.delete(id)?;
        if removed {
            info!(id, "trade removed");
        }
        Ok(removed)
    }

    /// The full record set.
    pub fn trades(&self) -> Result<Vec<Trade>, JournalError> {
        Ok(self.store.list()?)
    }
}
