//! CSV export with market and relative-time-window filters.
//!
//! Produces the table the download surface serves: a fixed header row,
//! one row per trade in the filtered set, notes always double-quote
//! wrapped, numbers in default decimal formatting.

use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Market, Trade};

/// CSV header row.
pub const CSV_HEADER: &str = "Date,Time,Market,Session,Script,Type,Entry,Exit,SL,TP,Qty,PnL,Status,Notes";

/// Relative export window, computed against the current date at export
/// time. Each variant starts at the beginning of the current calendar
/// period (week is Sunday-based).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportWindow {
    /// Current week, from Sunday.
    Weekly,
    /// Current calendar month.
    Monthly,
    /// Current calendar quarter.
    Quarterly,
    /// Current calendar year.
    Yearly,
    /// No time restriction.
    #[default]
    All,
}

impl ExportWindow {
    /// First date included in the window, relative to `today`. `None`
    /// means no restriction.
    #[must_use]
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Weekly => {
                let back = u64::from(today.weekday().num_days_from_sunday());
                Some(today.checked_sub_days(Days::new(back)).unwrap_or(today))
            }
            Self::Monthly => today.with_day(1),
            Self::Quarterly => {
                let quarter_month = today.month0() / 3 * 3 + 1;
                today.with_day(1).and_then(|d| d.with_month(quarter_month))
            }
            Self::Yearly => today.with_day(1).and_then(|d| d.with_month(1)),
            Self::All => None,
        }
    }
}

impl FromStr for ExportWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            "all" => Ok(Self::All),
            other => Err(format!("unknown export window: {other}")),
        }
    }
}

/// Render the filtered trade set as CSV.
///
/// `market = None` exports every market. Trades dated before the window
/// start are excluded. Rows keep the order of the input sequence.
#[must_use]
pub fn render_csv(
    trades: &[Trade],
    market: Option<Market>,
    window: ExportWindow,
    today: NaiveDate,
) -> String {
    let start = window.start(today);

    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(
        trades
            .iter()
            .filter(|t| market.is_none_or(|m| t.market == m))
            .filter(|t| start.is_none_or(|s| t.date >= s))
            .map(render_row),
    );
    lines.join("\n")
}

fn render_row(trade: &Trade) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},\"{}\"",
        trade.date.format("%Y-%m-%d"),
        trade.time.format("%H:%M"),
        trade.market,
        trade.session.as_deref().unwrap_or(""),
        trade.instrument,
        trade.side,
        trade.entry_price,
        trade.exit_price,
        trade.stop_loss,
        trade.take_profit,
        trade.quantity,
        trade.profit_loss,
        trade.outcome,
        trade.notes.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::test_support::draft;

    fn today() -> NaiveDate {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2026, 8, 19).unwrap()
    }

    fn trade_on(date: NaiveDate, market: Market) -> Trade {
        let mut d = draft();
        d.date = date;
        d.market = market;
        Trade::from_draft(d)
    }

    #[test]
    fn test_header_only_for_empty_set() {
        assert_eq!(
            render_csv(&[], None, ExportWindow::All, today()),
            CSV_HEADER
        );
    }

    #[test]
    fn test_row_shape_and_quoted_notes() {
        let mut d = draft();
        d.exit_price = dec!(110.5);
        d.stop_loss = dec!(90);
        d.take_profit = dec!(130);
        d.notes = Some("news spike, exited early".to_string());
        let trade = crate::models::Trade::from_draft(d);

        let csv = render_csv(
            std::slice::from_ref(&trade),
            None,
            ExportWindow::All,
            today(),
        );
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "2026-01-05,10:30,Forex,London,EUR/USD,Buy,100,110.5,90,130,2,21.0,Win,\"news spike, exited early\""
        );
    }

    #[test]
    fn test_missing_optionals_render_empty() {
        let mut d = draft();
        d.session = None;
        d.notes = None;
        let trade = crate::models::Trade::from_draft(d);

        let csv = render_csv(&[trade], None, ExportWindow::All, today());
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(",,EUR/USD"));
        assert!(row.ends_with(",\"\""));
    }

    #[test]
    fn test_market_filter() {
        let trades = vec![
            trade_on(today(), Market::Forex),
            trade_on(today(), Market::Indian),
        ];

        let csv = render_csv(&trades, Some(Market::Indian), ExportWindow::All, today());
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.lines().nth(1).unwrap().contains("Indian"));
    }

    #[test]
    fn test_window_starts() {
        let today = today(); // Wed 2026-08-19
        assert_eq!(
            ExportWindow::Weekly.start(today),
            Some(NaiveDate::from_ymd_opt(2026, 8, 16).unwrap()) // Sunday
        );
        assert_eq!(
            ExportWindow::Monthly.start(today),
            Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        );
        assert_eq!(
            ExportWindow::Quarterly.start(today),
            Some(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
        );
        assert_eq!(
            ExportWindow::Yearly.start(today),
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
        assert_eq!(ExportWindow::All.start(today), None);
    }

    #[test]
    fn test_window_excludes_older_trades() {
        let trades = vec![
            trade_on(NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(), Market::Forex),
            trade_on(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(), Market::Forex),
            trade_on(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), Market::Forex),
        ];

        let weekly = render_csv(&trades, None, ExportWindow::Weekly, today());
        assert_eq!(weekly.lines().count(), 2);

        let monthly = render_csv(&trades, None, ExportWindow::Monthly, today());
        assert_eq!(monthly.lines().count(), 3);

        let yearly = render_csv(&trades, None, ExportWindow::Yearly, today());
        assert_eq!(yearly.lines().count(), 4);
    }

    #[test]
    fn test_window_parse() {
        assert_eq!("weekly".parse::<ExportWindow>(), Ok(ExportWindow::Weekly));
        assert_eq!("all".parse::<ExportWindow>(), Ok(ExportWindow::All));
        assert!("fortnightly".parse::<ExportWindow>().is_err());
    }
}
