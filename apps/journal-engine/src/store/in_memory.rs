//! In-memory trade store for testing.

use std::sync::RwLock;

use super::{StoreError, TradeStore};
use crate::models::{Trade, TradeDraft};

/// In-memory implementation of [`TradeStore`].
///
/// Suitable for testing and ephemeral sessions. Not durable.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    trades: RwLock<Vec<Trade>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trades: RwLock::new(Vec::new()),
        }
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.read().unwrap().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.read().unwrap().is_empty()
    }
}

impl TradeStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Trade>, StoreError> {
        Ok(self.trades.read().unwrap().clone())
    }

    fn create(&self, draft: TradeDraft) -> Result<Trade, StoreError> {
        let trade = Trade::from_draft(draft);
        let mut trades = self.trades.write().unwrap();
        trades.insert(0, trade.clone());
        Ok(trade)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut trades = self.trades.write().unwrap();
        let before = trades.len();
        trades.retain(|t| t.id != id);
        Ok(trades.len() != before)
    }
}
