//! Portfolio aggregation: summary statistics and the cumulative equity
//! curve.
//!
//! Everything here is recomputed in full on every call; there is no
//! incremental or cached state, so results are never stale with respect to
//! the input slice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metrics::{round_money, round_rate, round_ratio};
use crate::models::{Outcome, Trade};

/// One point of the equity curve: cumulative P&L after a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// The trade's calendar date.
    pub date: NaiveDate,
    /// Cumulative profit/loss up to and including this trade.
    pub equity: Decimal,
}

/// Summary statistics over a set of trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of trades in the input.
    pub total_count: usize,
    /// Trades with [`Outcome::Win`].
    pub win_count: usize,
    /// Trades with [`Outcome::Loss`].
    pub loss_count: usize,
    /// Wins as a percentage of all input trades, rounded to 1 decimal
    /// place. Zero on empty input.
    pub win_rate: Decimal,
    /// Sum of profit/loss, rounded to 2 decimal places.
    pub net_pnl: Decimal,
    /// Mean risk:reward over all input trades, rounded to 2 decimal
    /// places. Trades without stop/target (ratio zero) stay in the mean;
    /// the journal has always counted them and excluding them would
    /// inflate the figure for selective stop users.
    pub average_risk_reward: Decimal,
    /// Cumulative P&L ordered by trade date ascending, one point per
    /// trade. Ties keep insertion order.
    pub equity_curve: Vec<EquityPoint>,
}

impl PortfolioSummary {
    fn empty() -> Self {
        Self {
            total_count: 0,
            win_count: 0,
            loss_count: 0,
            win_rate: Decimal::ZERO,
            net_pnl: Decimal::ZERO,
            average_risk_reward: Decimal::ZERO,
            equity_curve: Vec::new(),
        }
    }
}

/// Reduce a set of trades into summary statistics and the equity curve.
///
/// An empty input is a fully defined case: all numbers zero, empty curve.
#[must_use]
pub fn summarize(trades: &[Trade]) -> PortfolioSummary {
    if trades.is_empty() {
        return PortfolioSummary::empty();
    }

    let total_count = trades.len();
    let mut win_count = 0;
    let mut loss_count = 0;
    let mut pnl_sum = Decimal::ZERO;
    let mut rr_sum = Decimal::ZERO;

    for trade in trades {
        match trade.outcome {
            Outcome::Win => win_count += 1,
            Outcome::Loss => loss_count += 1,
            Outcome::Pending | Outcome::BreakEven => {}
        }
        pnl_sum += trade.profit_loss;
        rr_sum += trade.risk_reward;
    }

    let hundred = Decimal::from(100);
    let count = Decimal::from(total_count as u64);
    let win_rate = round_rate(Decimal::from(win_count as u64) / count * hundred);
    let average_risk_reward = round_ratio(rr_sum / count);

    PortfolioSummary {
        total_count,
        win_count,
        loss_count,
        win_rate,
        net_pnl: round_money(pnl_sum),
        average_risk_reward,
        equity_curve: equity_curve(trades),
    }
}

/// Build the cumulative equity curve: stable sort by date ascending, then a
/// running sum of profit/loss. Duplicate dates produce successive points.
fn equity_curve(trades: &[Trade]) -> Vec<EquityPoint> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    let mut cumulative = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|trade| {
            cumulative += trade.profit_loss;
            EquityPoint {
                date: trade.date,
                equity: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::test_support::draft;

    fn trade_on(day: u32, exit: Decimal) -> Trade {
        let mut d = draft();
        d.date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
        d.exit_price = exit;
        d.quantity = dec!(1);
        Trade::from_draft(d)
    }

    #[test]
    fn test_empty_input_is_all_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.win_rate, Decimal::ZERO);
        assert_eq!(summary.net_pnl, Decimal::ZERO);
        assert_eq!(summary.average_risk_reward, Decimal::ZERO);
        assert!(summary.equity_curve.is_empty());
    }

    #[test]
    fn test_counts_and_win_rate() {
        // Entry 100: exits at 110 (win), 90 (loss), 0 (pending).
        let trades = vec![
            trade_on(1, dec!(110)),
            trade_on(2, dec!(90)),
            trade_on(3, Decimal::ZERO),
        ];

        let summary = summarize(&trades);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.win_count, 1);
        assert_eq!(summary.loss_count, 1);
        // 1/3 = 33.333..% rounds to 33.3.
        assert_eq!(summary.win_rate, dec!(33.3));
        assert_eq!(summary.net_pnl, dec!(20.00));
    }

    #[test]
    fn test_win_rate_rounds_half_away_from_zero() {
        // 5/8 = 62.5% sits exactly on the 1-dp boundary already; use 1/16
        // = 6.25% to pin the midpoint: rounds to 6.3, not 6.2.
        let mut trades = vec![trade_on(1, dec!(110))];
        for day in 2..=16 {
            trades.push(trade_on(day, Decimal::ZERO));
        }
        assert_eq!(summarize(&trades).win_rate, dec!(6.3));
    }

    #[test]
    fn test_average_risk_reward_includes_zero_ratio_trades() {
        let mut with_levels = draft();
        with_levels.stop_loss = dec!(90);
        with_levels.take_profit = dec!(130); // R:R 3.00
        let trades = vec![
            Trade::from_draft(with_levels),
            trade_on(2, Decimal::ZERO), // no levels, R:R 0
        ];

        // (3.00 + 0) / 2, not 3.00.
        assert_eq!(summarize(&trades).average_risk_reward, dec!(1.50));
    }

    #[test]
    fn test_equity_curve_sorts_by_date_and_accumulates() {
        // +10 on day 1, -5 on day 2, +5 on day 3, inserted out of order.
        let trades = vec![
            trade_on(2, dec!(95)),  // -5
            trade_on(1, dec!(110)), // +10
            trade_on(3, dec!(105)), // +5
        ];

        let curve = summarize(&trades).equity_curve;
        let values: Vec<Decimal> = curve.iter().map(|p| p.equity).collect();
        assert_eq!(values, vec![dec!(10), dec!(5), dec!(10)]);
        assert_eq!(curve[0].date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(curve[2].date, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
    }

    #[test]
    fn test_equity_curve_duplicate_dates_keep_insertion_order() {
        let trades = vec![
            trade_on(1, dec!(110)), // +10
            trade_on(1, dec!(95)),  // -5
        ];

        let curve = summarize(&trades).equity_curve;
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].equity, dec!(10));
        assert_eq!(curve[1].equity, dec!(5));
    }

    #[test]
    fn test_curve_monotone_when_all_pnl_non_negative() {
        let trades = vec![
            trade_on(1, dec!(110)),
            trade_on(2, dec!(100)), // break-even
            trade_on(3, dec!(101)),
        ];

        let curve = summarize(&trades).equity_curve;
        for pair in curve.windows(2) {
            assert!(pair[1].equity >= pair[0].equity);
        }
    }
}
