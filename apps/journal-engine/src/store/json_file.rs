//! Durable JSON-file trade store.
//!
//! The whole record set lives in one JSON array in one file. Every read
//! goes back to the file, so a read after a completed mutation always
//! observes it; no in-memory copy can diverge. Writes land in a temp file
//! in the same directory and are renamed into place, so a crash mid-write
//! leaves the previous payload intact and no partial record is ever
//! observable.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::{StoreError, TradeStore};
use crate::models::{Trade, TradeDraft};

/// File-backed implementation of [`TradeStore`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles; last write wins per call.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over a journal file. The file is created on the
    /// first mutation; a missing file reads as an empty record set.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Trade>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let payload = fs::read_to_string(&self.path)?;
        serde_json::from_str(&payload).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn persist(&self, trades: &[Trade]) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string_pretty(trades).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TradeStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Trade>, StoreError> {
        self.load()
    }

    fn create(&self, draft: TradeDraft) -> Result<Trade, StoreError> {
        let _guard = self.write_lock.lock().unwrap();

        let mut trades = self.load()?;
        let trade = Trade::from_draft(draft);
        trades.insert(0, trade.clone());
        self.persist(&trades)?;

        debug!(id = %trade.id, instrument = %trade.instrument, "trade persisted");
        Ok(trade)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().unwrap();

        let mut trades = self.load()?;
        let before = trades.len();
        trades.retain(|t| t.id != id);
        if trades.len() == before {
            debug!(id, "delete requested for unknown trade id");
            return Ok(false);
        }
        self.persist(&trades)?;

        debug!(id, "trade deleted");
        Ok(true)
    }
}
