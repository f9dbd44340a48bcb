//! Filtering and sorting over the record set.
//!
//! The engine is pure: it never mutates the input slice or the underlying
//! store, and the same inputs always yield the same output sequence.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{Side, Trade};

/// Side filter: exact match or pass-everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SideFilter {
    /// Every trade passes.
    #[default]
    All,
    /// Only buys pass.
    Buy,
    /// Only sells pass.
    Sell,
}

impl SideFilter {
    fn matches(self, side: Side) -> bool {
        match self {
            Self::All => true,
            Self::Buy => side == Side::Buy,
            Self::Sell => side == Side::Sell,
        }
    }
}

impl From<Side> for SideFilter {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => Self::Buy,
            Side::Sell => Self::Sell,
        }
    }
}

/// Filter configuration. Active filters compose with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeFilter {
    /// Case-insensitive substring match against instrument OR notes.
    pub text: Option<String>,
    /// Exact calendar-date match.
    pub date: Option<NaiveDate>,
    /// Side filter.
    pub side: SideFilter,
}

impl TradeFilter {
    /// Whether a trade passes every active filter.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_instrument = trade.instrument.to_lowercase().contains(&needle);
            let in_notes = trade
                .notes
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle);
            if !in_instrument && !in_notes {
                return false;
            }
        }
        if let Some(date) = self.date {
            if trade.date != date {
                return false;
            }
        }
        self.side.matches(trade.side)
    }
}

/// Sortable trade fields. Comparison is field-type-aware: dates compare
/// chronologically, numbers numerically, strings lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Instrument identifier.
    Instrument,
    /// Entry price.
    EntryPrice,
    /// Derived profit/loss.
    ProfitLoss,
    /// Quantity.
    Quantity,
    /// Outcome classification.
    Outcome,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "instrument" => Ok(Self::Instrument),
            "entry" => Ok(Self::EntryPrice),
            "pnl" => Ok(Self::ProfitLoss),
            "qty" => Ok(Self::Quantity),
            "outcome" => Ok(Self::Outcome),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The single active sort: one key plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Active sort key.
    pub key: SortKey,
    /// Active direction.
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Most-recent-first, the journal's presentation default.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Create an ascending sort on a key.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Request a sort on `key`: the active key flips direction, any other
    /// key resets to ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            *self = Self::ascending(key);
        }
    }

    fn compare(&self, a: &Trade, b: &Trade) -> Ordering {
        let ordering = match self.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Time => a.time.cmp(&b.time),
            SortKey::Instrument => a.instrument.cmp(&b.instrument),
            SortKey::EntryPrice => a.entry_price.cmp(&b.entry_price),
            SortKey::ProfitLoss => a.profit_loss.cmp(&b.profit_loss),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Outcome => a.outcome.cmp(&b.outcome),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Filter then stable-sort a trade sequence for presentation.
///
/// Equal sort keys preserve the relative input order.
#[must_use]
pub fn apply(trades: &[Trade], filter: &TradeFilter, sort: &SortConfig) -> Vec<Trade> {
    let mut result: Vec<Trade> = trades
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    result.sort_by(|a, b| sort.compare(a, b));
    result
}
