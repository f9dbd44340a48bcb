//! Raw trade input, before derivation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::trade::{Market, Side};

/// Validation failures for raw trade input.
///
/// Raised at the input boundary, before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Instrument (script/pair) is required.
    #[error("instrument must not be empty")]
    EmptyInstrument,

    /// Entry price is required and must be positive.
    #[error("entry price must be positive")]
    NonPositiveEntryPrice,

    /// Quantity is required and must be positive.
    #[error("quantity must be positive")]
    NonPositiveQuantity,

    /// Optional prices are zero-or-positive; zero means not set.
    #[error("{field} must not be negative")]
    NegativePrice {
        /// Which field carried the negative value.
        field: &'static str,
    },
}

/// Raw trade fields as submitted by the caller.
///
/// Derived fields are computed from this exactly once, at save time, by
/// [`crate::metrics::compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDraft {
    /// Calendar date of the trade.
    pub date: NaiveDate,
    /// Local time-of-day of the trade.
    pub time: NaiveTime,
    /// Market this trade belongs to.
    pub market: Market,
    /// Optional trading-session name.
    pub session: Option<String>,
    /// Script or pair identifier.
    pub instrument: String,
    /// Trade direction.
    pub side: Side,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price; zero while the position is open.
    pub exit_price: Decimal,
    /// Stop-loss price; zero means not set.
    pub stop_loss: Decimal,
    /// Take-profit price; zero means not set.
    pub take_profit: Decimal,
    /// Quantity / lots.
    pub quantity: Decimal,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl TradeDraft {
    /// Check required-field presence and range constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint. The store is never touched
    /// for a draft that fails validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.instrument.trim().is_empty() {
            return Err(ValidationError::EmptyInstrument);
        }
        if self.entry_price <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveEntryPrice);
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity);
        }
        if self.exit_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                field: "exit price",
            });
        }
        if self.stop_loss < Decimal::ZERO {
            return Err(ValidationError::NegativePrice { field: "stop loss" });
        }
        if self.take_profit < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                field: "take profit",
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::test_support::draft;
    use super::*;

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn test_empty_instrument_rejected() {
        let mut d = draft();
        d.instrument = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyInstrument));
    }

    #[test]
    fn test_zero_entry_rejected() {
        let mut d = draft();
        d.entry_price = Decimal::ZERO;
        assert_eq!(d.validate(), Err(ValidationError::NonPositiveEntryPrice));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut d = draft();
        d.quantity = dec!(-1);
        assert_eq!(d.validate(), Err(ValidationError::NonPositiveQuantity));

        d.quantity = Decimal::ZERO;
        assert_eq!(d.validate(), Err(ValidationError::NonPositiveQuantity));
    }

    #[test]
    fn test_negative_optional_prices_rejected() {
        let mut d = draft();
        d.stop_loss = dec!(-0.5);
        assert_eq!(
            d.validate(),
            Err(ValidationError::NegativePrice { field: "stop loss" })
        );

        let mut d = draft();
        d.take_profit = dec!(-1);
        assert!(d.validate().is_err());

        let mut d = draft();
        d.exit_price = dec!(-1);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_zero_optional_prices_mean_not_set() {
        // Zero exit/stop/target is the "not set" sentinel, not a violation.
        assert_eq!(draft().validate(), Ok(()));
    }
}
