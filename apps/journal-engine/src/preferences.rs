//! Persisted market preference.
//!
//! A single scalar: which market ({Indian, Forex}) the user works in. Read
//! once at startup, written whenever the user changes market. Core
//! components never read this ambient state; they take trade data as
//! explicit parameters.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::models::Market;
use crate::store::StoreError;

/// File-backed store for the selected market.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a preference store over a file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the saved market. `Ok(None)` when no preference was ever
    /// saved; an unreadable value is reported as corrupt, not defaulted.
    pub fn load(&self) -> Result<Option<Market>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let market = raw
            .trim()
            .parse::<Market>()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(market))
    }

    /// Persist the selected market.
    pub fn save(&self, market: Market) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, market.to_string())?;
        fs::rename(&tmp, &self.path)?;
        debug!(%market, "market preference saved");
        Ok(())
    }
}
