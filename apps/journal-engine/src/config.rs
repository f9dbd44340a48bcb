//! Runtime configuration.
//!
//! One knob: `JOURNAL_DATA_DIR`, the directory holding the journal file
//! and the market preference (default: current directory).

use std::path::{Path, PathBuf};

/// Resolved configuration for the journal engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Directory holding the journal's files.
    pub data_dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl JournalConfig {
    /// Build configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("JOURNAL_DATA_DIR").map_or_else(
            |_| Self::default(),
            |dir| Self {
                data_dir: PathBuf::from(dir),
            },
        )
    }

    /// Configuration rooted at an explicit directory.
    #[must_use]
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
        }
    }

    /// Path of the journal record file.
    #[must_use]
    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join("journal.json")
    }

    /// Path of the market preference file.
    #[must_use]
    pub fn preference_path(&self) -> PathBuf {
        self.data_dir.join("market_pref")
    }

    /// The configured data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
