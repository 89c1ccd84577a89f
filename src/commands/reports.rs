// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::stats;
use crate::store::LedgerStore;
use crate::utils::{fmt_amount, fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::Local;
use rust_decimal::RoundingStrategy;

pub fn summary(store: &LedgerStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = match sub.get_one::<String>("today") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let s = stats::summarize(store.expenses(), today);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Total".into(), fmt_money(&s.total, &cfg.currency)],
            vec!["Transactions".into(), s.count.to_string()],
            vec!["Average".into(), fmt_money(&s.average, &cfg.currency)],
            vec![format!("Today ({})", today), fmt_money(&s.today, &cfg.currency)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

pub fn report(store: &LedgerStore, cfg: &Config) -> Result<()> {
    match render_report(store.expenses(), &cfg.currency) {
        Ok(text) => print!("{}", text),
        Err(LedgerError::EmptyLedger) => println!("No expenses to generate report!"),
        Err(LedgerError::ZeroTotal) => {
            println!("Expenses add up to zero, no category breakdown to report")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Plain-text report: overall figures followed by the category breakdown,
/// largest category first.
pub fn render_report(expenses: &[Expense], symbol: &str) -> LedgerResult<String> {
    let breakdown = stats::category_totals(expenses)?;
    let rule = "=".repeat(60);

    let mut out = format!("{rule}\nEXPENSE TRACKER REPORT\n{rule}\n\n");
    out.push_str(&format!(
        "Total Expenses: {}\n",
        fmt_money(&stats::total(expenses), symbol)
    ));
    out.push_str(&format!(
        "Number of Transactions: {}\n",
        stats::count(expenses)
    ));
    out.push_str(&format!(
        "Average per Transaction: {}\n\n",
        fmt_money(&stats::average(expenses), symbol)
    ));
    out.push_str(&format!("CATEGORY BREAKDOWN:\n{}\n", "-".repeat(50)));
    for item in breakdown {
        let pct = item
            .percentage
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        out.push_str(&format!(
            "{:20} {}{:>12} ({:>5}%)\n",
            item.category.label(),
            symbol,
            fmt_amount(&item.amount),
            format!("{:.1}", pct)
        ));
    }
    Ok(out)
}
