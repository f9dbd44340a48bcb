//! Pure per-trade metric derivation.
//!
//! Maps a trade's raw inputs (entry/exit/side/quantity/stop/target) to its
//! derived fields: profit/loss, risk:reward, and outcome status. The
//! function is deterministic, side-effect-free, and never reads the store;
//! callers re-run it on every raw-field change.
//!
//! Rounding is pinned to round-half-away-from-zero
//! (`RoundingStrategy::MidpointAwayFromZero`): 2 decimal places for money
//! and ratios, 1 for the win rate.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Outcome, Side, TradeDraft};

/// Derived fields for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeMetrics {
    /// Profit/loss, rounded to 2 decimal places. Zero while open.
    pub profit_loss: Decimal,
    /// Risk:reward ratio, rounded to 2 decimal places. Zero unless both
    /// stop-loss and take-profit are set and the risk is nonzero.
    pub risk_reward: Decimal,
    /// Outcome classification.
    pub outcome: Outcome,
}

/// Round a monetary amount to 2 decimal places, half away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a ratio to 2 decimal places, half away from zero.
#[must_use]
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage to 1 decimal place, half away from zero.
#[must_use]
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Derive profit/loss, risk:reward, and outcome from raw trade fields.
///
/// A zero exit price means the position is still open: P&L is zero and the
/// outcome is [`Outcome::Pending`]. The result is undefined for a zero
/// entry price; validation rejects that upstream.
#[must_use]
pub fn compute(draft: &TradeDraft) -> TradeMetrics {
    let closed = draft.exit_price > Decimal::ZERO;

    let profit_loss = if closed {
        let per_unit = match draft.side {
            Side::Buy => draft.exit_price - draft.entry_price,
            Side::Sell => draft.entry_price - draft.exit_price,
        };
        round_money(per_unit * draft.quantity)
    } else {
        Decimal::ZERO
    };

    let outcome = if closed {
        if profit_loss > Decimal::ZERO {
            Outcome::Win
        } else if profit_loss < Decimal::ZERO {
            Outcome::Loss
        } else {
            Outcome::BreakEven
        }
    } else {
        Outcome::Pending
    };

    let risk_reward = if draft.stop_loss > Decimal::ZERO && draft.take_profit > Decimal::ZERO {
        let risk = (draft.entry_price - draft.stop_loss).abs();
        if risk > Decimal::ZERO {
            let reward = (draft.take_profit - draft.entry_price).abs();
            round_ratio(reward / risk)
        } else {
            Decimal::ZERO
        }
    } else {
        Decimal::ZERO
    };

    TradeMetrics {
        profit_loss,
        risk_reward,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::*;
    use crate::models::test_support::draft;

    fn closed(side: Side, entry: Decimal, exit: Decimal, qty: Decimal) -> TradeDraft {
        let mut d = draft();
        d.side = side;
        d.entry_price = entry;
        d.exit_price = exit;
        d.quantity = qty;
        d
    }

    #[test]
    fn test_open_position_is_pending_with_zero_pnl() {
        let mut d = draft();
        d.exit_price = Decimal::ZERO;
        d.stop_loss = dec!(90);
        d.take_profit = dec!(130);

        let m = compute(&d);
        assert_eq!(m.profit_loss, Decimal::ZERO);
        assert_eq!(m.outcome, Outcome::Pending);
        // Risk:reward is still derived while open.
        assert_eq!(m.risk_reward, dec!(3.00));
    }

    #[test_case(Side::Buy, dec!(100), dec!(110), dec!(2), dec!(20.00), Outcome::Win; "buy win")]
    #[test_case(Side::Sell, dec!(100), dec!(110), dec!(2), dec!(-20.00), Outcome::Loss; "sell loss")]
    #[test_case(Side::Sell, dec!(100), dec!(90), dec!(2), dec!(20.00), Outcome::Win; "sell win")]
    #[test_case(Side::Buy, dec!(100), dec!(95), dec!(3), dec!(-15.00), Outcome::Loss; "buy loss")]
    #[test_case(Side::Buy, dec!(100), dec!(100), dec!(5), dec!(0), Outcome::BreakEven; "flat exit")]
    fn test_pnl_and_outcome(
        side: Side,
        entry: Decimal,
        exit: Decimal,
        qty: Decimal,
        pnl: Decimal,
        outcome: Outcome,
    ) {
        let m = compute(&closed(side, entry, exit, qty));
        assert_eq!(m.profit_loss, pnl);
        assert_eq!(m.outcome, outcome);
    }

    #[test]
    fn test_risk_reward_three_to_one() {
        let mut d = draft();
        d.entry_price = dec!(100);
        d.stop_loss = dec!(90);
        d.take_profit = dec!(130);
        assert_eq!(compute(&d).risk_reward, dec!(3.00));
    }

    #[test]
    fn test_risk_reward_zero_without_both_levels() {
        let mut d = draft();
        d.stop_loss = dec!(90);
        d.take_profit = Decimal::ZERO;
        assert_eq!(compute(&d).risk_reward, Decimal::ZERO);

        d.stop_loss = Decimal::ZERO;
        d.take_profit = dec!(130);
        assert_eq!(compute(&d).risk_reward, Decimal::ZERO);
    }

    #[test]
    fn test_risk_reward_zero_when_stop_equals_entry() {
        // Zero risk must not divide.
        let mut d = draft();
        d.entry_price = dec!(100);
        d.stop_loss = dec!(100);
        d.take_profit = dec!(130);
        assert_eq!(compute(&d).risk_reward, Decimal::ZERO);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0.005 per unit on quantity 1 rounds up to 0.01 (and down to -0.01
        // for the short side), pinning MidpointAwayFromZero.
        let m = compute(&closed(Side::Buy, dec!(100.000), dec!(100.005), dec!(1)));
        assert_eq!(m.profit_loss, dec!(0.01));
        assert_eq!(m.outcome, Outcome::Win);

        let m = compute(&closed(Side::Sell, dec!(100.000), dec!(100.005), dec!(1)));
        assert_eq!(m.profit_loss, dec!(-0.01));
        assert_eq!(m.outcome, Outcome::Loss);

        // 1.125 risk:reward midpoint rounds to 1.13.
        let mut d = draft();
        d.entry_price = dec!(100);
        d.stop_loss = dec!(92);
        d.take_profit = dec!(109);
        assert_eq!(compute(&d).risk_reward, dec!(1.13));
    }

    proptest! {
        #[test]
        fn prop_buy_and_sell_pnl_mirror(
            entry in 1i64..1_000_000,
            exit in 1i64..1_000_000,
            qty in 1i64..10_000,
        ) {
            let entry = Decimal::new(entry, 2);
            let exit = Decimal::new(exit, 2);
            let qty = Decimal::new(qty, 2);

            let buy = compute(&closed(Side::Buy, entry, exit, qty));
            let sell = compute(&closed(Side::Sell, entry, exit, qty));

            prop_assert_eq!(buy.profit_loss, -sell.profit_loss);
        }

        #[test]
        fn prop_outcome_tracks_pnl_sign(
            entry in 1i64..1_000_000,
            exit in 1i64..1_000_000,
            qty in 1i64..10_000,
        ) {
            let m = compute(&closed(
                Side::Buy,
                Decimal::new(entry, 2),
                Decimal::new(exit, 2),
                Decimal::new(qty, 2),
            ));

            let expected = if m.profit_loss > Decimal::ZERO {
                Outcome::Win
            } else if m.profit_loss < Decimal::ZERO {
                Outcome::Loss
            } else {
                Outcome::BreakEven
            };
            prop_assert_eq!(m.outcome, expected);
        }

        #[test]
        fn prop_risk_reward_never_negative(
            entry in 1i64..1_000_000,
            sl in 0i64..1_000_000,
            tp in 0i64..1_000_000,
        ) {
            let mut d = draft();
            d.entry_price = Decimal::new(entry, 2);
            d.stop_loss = Decimal::new(sl, 2);
            d.take_profit = Decimal::new(tp, 2);

            prop_assert!(compute(&d).risk_reward >= Decimal::ZERO);
        }
    }
}
