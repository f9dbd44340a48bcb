//! The persisted trade record and its closed enumerations.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::TradeDraft;
use crate::metrics;

/// Market a trade belongs to. Selected once per session, not edited
/// per trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    /// Indian equities/derivatives.
    Indian,
    /// Foreign exchange.
    Forex,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indian => write!(f, "Indian"),
            Self::Forex => write!(f, "Forex"),
        }
    }
}

impl FromStr for Market {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Indian" => Ok(Self::Indian),
            "Forex" => Ok(Self::Forex),
            other => Err(UnknownVariant::new("market", other)),
        }
    }
}

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Long position.
    Buy,
    /// Short position.
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for Side {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(Self::Buy),
            "Sell" => Ok(Self::Sell),
            other => Err(UnknownVariant::new("side", other)),
        }
    }
}

/// Outcome classification of a trade.
///
/// `Pending` holds exactly while the exit price is zero (position still
/// open); closed trades are deterministically one of the other three.
///
/// The derived `Ord` groups open trades first, then winners, losers, and
/// break-even trades, which is the order the sort key uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// Position still open.
    Pending,
    /// Closed with positive P&L.
    Win,
    /// Closed with negative P&L.
    Loss,
    /// Closed flat.
    BreakEven,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
            Self::BreakEven => write!(f, "BreakEven"),
        }
    }
}

/// Rejected value for a closed enumeration.
///
/// Unknown variants are rejected at the input boundary rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field}: {value}")]
pub struct UnknownVariant {
    field: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// A persisted trade record.
///
/// Immutable once stored except for deletion. The derived fields
/// (`profit_loss`, `risk_reward`, `outcome`) are a pure function of the raw
/// fields at save time and are never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Opaque unique identifier, assigned by the store at creation.
    pub id: String,
    /// Calendar date of the trade.
    pub date: NaiveDate,
    /// Local time-of-day of the trade.
    pub time: NaiveTime,
    /// Market this trade belongs to.
    pub market: Market,
    /// Optional trading-session name (e.g. "London", "Morning").
    pub session: Option<String>,
    /// Script or pair identifier (e.g. "EUR/USD"). Non-empty.
    pub instrument: String,
    /// Trade direction.
    pub side: Side,
    /// Entry price. Positive.
    pub entry_price: Decimal,
    /// Exit price. Zero while the position is still open.
    pub exit_price: Decimal,
    /// Stop-loss price. Zero means not set.
    pub stop_loss: Decimal,
    /// Take-profit price. Zero means not set.
    pub take_profit: Decimal,
    /// Quantity / lots. Positive.
    pub quantity: Decimal,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Derived: profit/loss, rounded to 2 decimal places.
    pub profit_loss: Decimal,
    /// Derived: risk:reward ratio, rounded to 2 decimal places.
    pub risk_reward: Decimal,
    /// Derived: outcome classification.
    pub outcome: Outcome,
}

impl Trade {
    /// Build a full record from raw input: derive the metrics once and
    /// assign a fresh id.
    ///
    /// The draft is expected to have passed [`TradeDraft::validate`];
    /// metrics are undefined for a zero entry price.
    #[must_use]
    pub fn from_draft(draft: TradeDraft) -> Self {
        let derived = metrics::compute(&draft);
        Self {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            time: draft.time,
            market: draft.market,
            session: draft.session,
            instrument: draft.instrument,
            side: draft.side,
            entry_price: draft.entry_price,
            exit_price: draft.exit_price,
            stop_loss: draft.stop_loss,
            take_profit: draft.take_profit,
            quantity: draft.quantity,
            notes: draft.notes,
            profit_loss: derived.profit_loss,
            risk_reward: derived.risk_reward,
            outcome: derived.outcome,
        }
    }

    /// Whether the position is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.outcome == Outcome::Pending
    }
}
