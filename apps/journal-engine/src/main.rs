//! Journal Engine Binary
//!
//! Thin CLI over the journal library.
//!
//! # Usage
//!
//! ```bash
//! journal-engine market Forex
//! journal-engine add --script EUR/USD --side Buy --entry 1.0850 --qty 2 \
//!     --exit 1.0920 --sl 1.0800 --tp 1.0950 --notes "london breakout"
//! journal-engine list --search eur --sort pnl --desc
//! journal-engine stats
//! journal-engine export --market Forex --window monthly --out trades.csv
//! journal-engine delete <id>
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_DATA_DIR`: directory for journal files (default: `.`)
//! - `RUST_LOG`: log level (default: `info`)

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use journal_engine::{
    ExportWindow, Journal, JournalConfig, JsonFileStore, Market, PreferenceStore, Side, SideFilter,
    SortConfig, SortDirection, SortKey, TradeDraft, TradeFilter, query, render_csv, summarize,
    telemetry,
};

fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = JournalConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let journal = Journal::new(JsonFileStore::new(config.journal_path()));
    let prefs = PreferenceStore::new(config.preference_path());

    match command.as_str() {
        "add" => cmd_add(&journal, &prefs, &args[1..]),
        "list" => cmd_list(&journal, &args[1..]),
        "stats" => cmd_stats(&journal),
        "export" => cmd_export(&journal, &args[1..]),
        "delete" => cmd_delete(&journal, &args[1..]),
        "market" => cmd_market(&prefs, &args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn print_usage() {
    println!(
        "journal-engine - trading journal\n\n\
         Commands:\n  \
         add      --script S --side Buy|Sell --entry N --qty N\n           \
         [--exit N] [--sl N] [--tp N] [--date YYYY-MM-DD] [--time HH:MM]\n           \
         [--market Indian|Forex] [--session S] [--notes S]\n  \
         list     [--search T] [--date YYYY-MM-DD] [--side Buy|Sell]\n           \
         [--sort date|time|instrument|entry|pnl|qty|outcome] [--desc]\n  \
         stats    portfolio summary and equity curve\n  \
         export   [--market Indian|Forex] [--window weekly|monthly|quarterly|yearly|all]\n           \
         [--out FILE]\n  \
         delete   <id>\n  \
         market   [Indian|Forex]   show or set the market preference"
    );
}

/// Parse `--flag value` pairs; flags in `switches` take no value.
fn parse_flags(args: &[String], switches: &[&str]) -> Result<HashMap<String, String>> {
    let mut flags = HashMap::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let key = arg
            .strip_prefix("--")
            .ok_or_else(|| anyhow!("unexpected argument: {arg}"))?;
        if switches.contains(&key) {
            flags.insert(key.to_string(), "true".to_string());
            continue;
        }
        let value = iter
            .next()
            .ok_or_else(|| anyhow!("missing value for --{key}"))?;
        flags.insert(key.to_string(), value.clone());
    }
    Ok(flags)
}

fn parse_decimal(flags: &HashMap<String, String>, key: &str) -> Result<Option<Decimal>> {
    flags
        .get(key)
        .map(|v| v.parse::<Decimal>().with_context(|| format!("invalid --{key}: {v}")))
        .transpose()
}

fn cmd_add(
    journal: &Journal<JsonFileStore>,
    prefs: &PreferenceStore,
    args: &[String],
) -> Result<()> {
    let flags = parse_flags(args, &[])?;

    let market = match flags.get("market") {
        Some(v) => Market::from_str(v)?,
        None => prefs
            .load()?
            .ok_or_else(|| anyhow!("no market preference set; pass --market or run `journal-engine market <Indian|Forex>`"))?,
    };

    let now = Local::now();
    let date = flags
        .get("date")
        .map(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").with_context(|| format!("invalid --date: {v}")))
        .transpose()?
        .unwrap_or_else(|| now.date_naive());
    let time = flags
        .get("time")
        .map(|v| NaiveTime::parse_from_str(v, "%H:%M").with_context(|| format!("invalid --time: {v}")))
        .transpose()?
        .unwrap_or_else(|| now.time());

    let draft = TradeDraft {
        date,
        time,
        market,
        session: flags.get("session").cloned(),
        instrument: flags.get("script").cloned().unwrap_or_default(),
        side: Side::from_str(flags.get("side").map_or("Buy", String::as_str))?,
        entry_price: parse_decimal(&flags, "entry")?.unwrap_or(Decimal::ZERO),
        exit_price: parse_decimal(&flags, "exit")?.unwrap_or(Decimal::ZERO),
        stop_loss: parse_decimal(&flags, "sl")?.unwrap_or(Decimal::ZERO),
        take_profit: parse_decimal(&flags, "tp")?.unwrap_or(Decimal::ZERO),
        quantity: parse_decimal(&flags, "qty")?.unwrap_or(Decimal::ZERO),
        notes: flags.get("notes").cloned(),
    };

    let trade = journal.add(draft)?;
    println!(
        "recorded {} {} {} @ {} (pnl {}, r:r {}, {})",
        trade.id, trade.side, trade.instrument, trade.entry_price, trade.profit_loss,
        trade.risk_reward, trade.outcome
    );
    Ok(())
}

fn cmd_list(journal: &Journal<JsonFileStore>, args: &[String]) -> Result<()> {
    let flags = parse_flags(args, &["desc"])?;

    let filter = TradeFilter {
        text: flags.get("search").cloned(),
        date: flags
            .get("date")
            .map(|v| {
                NaiveDate::parse_from_str(v, "%Y-%m-%d")
                    .with_context(|| format!("invalid --date: {v}"))
            })
            .transpose()?,
        side: flags
            .get("side")
            .map(|v| Side::from_str(v))
            .transpose()?
            .map_or(SideFilter::All, SideFilter::from),
    };

    let mut sort = match flags.get("sort") {
        Some(key) => SortConfig::ascending(key.parse::<SortKey>().map_err(|e| anyhow!(e))?),
        None => SortConfig::default(),
    };
    if flags.contains_key("desc") {
        sort.direction = SortDirection::Descending;
    }

    let trades = journal.trades()?;
    let view = query::apply(&trades, &filter, &sort);

    println!(
        "{:<36} {:<10} {:<5} {:<12} {:<4} {:>12} {:>12} {:>8} {:>12} {}",
        "id", "date", "time", "script", "side", "entry", "exit", "qty", "pnl", "status"
    );
    for t in &view {
        println!(
            "{:<36} {:<10} {:<5} {:<12} {:<4} {:>12} {:>12} {:>8} {:>12} {}",
            t.id,
            t.date.format("%Y-%m-%d"),
            t.time.format("%H:%M"),
            t.instrument,
            t.side,
            t.entry_price,
            t.exit_price,
            t.quantity,
            t.profit_loss,
            t.outcome
        );
    }
    println!("{} trade(s)", view.len());
    Ok(())
}

fn cmd_stats(journal: &Journal<JsonFileStore>) -> Result<()> {
    let trades = journal.trades()?;
    let summary = summarize(&trades);

    println!("total trades       {}", summary.total_count);
    println!(
        "win rate           {}% ({} W - {} L)",
        summary.win_rate, summary.win_count, summary.loss_count
    );
    println!("net p&l            {}", summary.net_pnl);
    println!("avg risk:reward    {}", summary.average_risk_reward);

    if !summary.equity_curve.is_empty() {
        println!("\nequity curve:");
        for point in &summary.equity_curve {
            println!("  {}  {}", point.date.format("%Y-%m-%d"), point.equity);
        }
    }
    Ok(())
}

fn cmd_export(journal: &Journal<JsonFileStore>, args: &[String]) -> Result<()> {
    let flags = parse_flags(args, &[])?;

    let market = flags
        .get("market")
        .map(|v| Market::from_str(v))
        .transpose()?;
    let window = flags
        .get("window")
        .map(|v| v.parse::<ExportWindow>().map_err(|e| anyhow!(e)))
        .transpose()?
        .unwrap_or_default();

    let trades = journal.trades()?;
    let csv = render_csv(&trades, market, window, Local::now().date_naive());

    match flags.get("out") {
        Some(path) => {
            std::fs::write(path, &csv).with_context(|| format!("writing {path}"))?;
            println!("exported {} line(s) to {path}", csv.lines().count());
        }
        None => println!("{csv}"),
    }
    Ok(())
}

fn cmd_delete(journal: &Journal<JsonFileStore>, args: &[String]) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("usage: journal-engine delete <id>");
    };
    if journal.remove(id)? {
        println!("deleted {id}");
    } else {
        println!("no trade with id {id}");
    }
    Ok(())
}

fn cmd_market(prefs: &PreferenceStore, args: &[String]) -> Result<()> {
    match args.first() {
        Some(value) => {
            let market = Market::from_str(value)?;
            prefs.save(market)?;
            println!("market preference set to {market}");
        }
        None => match prefs.load()? {
            Some(market) => println!("{market}"),
            None => println!("no market preference set"),
        },
    }
    Ok(())
}
