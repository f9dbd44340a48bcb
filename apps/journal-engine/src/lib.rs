// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Journal Engine - Trading Journal Core Library
//!
//! Record store and derived-analytics engine for a single-user trading
//! journal.
//!
//! # Architecture
//!
//! - `models`: trade record and raw-input types (closed enums, Decimal money)
//! - `metrics`: pure per-trade derivation (P&L, risk:reward, outcome)
//! - `analytics`: portfolio aggregation and the cumulative equity curve
//! - `query`: composable filters and stable single-key sorting
//! - `store`: `TradeStore` port with durable JSON-file and in-memory adapters
//! - `export`: CSV rendering with market and relative-time-window filters
//! - `journal`: validation + persistence orchestration over a `TradeStore`
//! - `preferences`: persisted market selection
//!
//! Derived fields are computed exactly once, at save time, and are never
//! edited independently; aggregation and queries are recomputed in full on
//! every call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Runtime configuration (data directory, file paths).
pub mod config;

/// Top-level error type.
pub mod error;

/// Portfolio aggregation: summary statistics and the equity curve.
pub mod analytics;

/// CSV export with market and time-window filters.
pub mod export;

/// Validation + persistence orchestration over a `TradeStore`.
pub mod journal;

/// Pure per-trade metric derivation.
pub mod metrics;

/// Trade record and raw-input types.
pub mod models;

/// Persisted market preference.
pub mod preferences;

/// Filtering and sorting over the record set.
pub mod query;

/// `TradeStore` port and adapters.
pub mod store;

/// Console tracing setup.
pub mod telemetry;

pub use analytics::{EquityPoint, PortfolioSummary, summarize};
pub use config::JournalConfig;
pub use error::JournalError;
pub use export::{ExportWindow, render_csv};
pub use journal::Journal;
pub use metrics::{TradeMetrics, compute};
pub use models::{Market, Outcome, Side, Trade, TradeDraft, UnknownVariant, ValidationError};
pub use preferences::PreferenceStore;
pub use query::{SideFilter, SortConfig, SortDirection, SortKey, TradeFilter};
pub use store::{InMemoryStore, JsonFileStore, StoreError, TradeStore};
