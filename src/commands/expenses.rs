// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::persisted;
use crate::config::Config;
use crate::models::{Category, Expense};
use crate::stats;
use crate::store::LedgerStore;
use crate::utils::{clip, fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;

const DESCRIPTION_WIDTH: usize = 50;

pub fn add(store: &mut LedgerStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let expense = expense_from_args(sub, &cfg.currency)?;
    let line = format!(
        "Recorded {} for {} on {}",
        fmt_money(&expense.amount, &cfg.currency),
        expense.category,
        expense.date
    );
    if let Some(id) = persisted(store.add(expense))? {
        println!("{} (id {})", line, id);
    }
    Ok(())
}

/// Validates the `add` arguments into an unsaved record. Nothing is
/// touched when any field is malformed.
pub fn expense_from_args(sub: &clap::ArgMatches, symbol: &str) -> Result<Expense> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap(), symbol)?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let description = sub
        .get_one::<String>("description")
        .map(String::as_str)
        .unwrap_or("");
    Ok(Expense::new(amount, category, description, date))
}

pub fn list(store: &LedgerStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, cfg, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    clip(&r.description, DESCRIPTION_WIDTH),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Category", "Description", "Amount"], rows)
        );
        let s = stats::summarize(store.expenses(), Local::now().date_naive());
        println!(
            "Total: {} | Transactions: {} | Average: {} | Today: {}",
            fmt_money(&s.total, &cfg.currency),
            s.count,
            fmt_money(&s.average, &cfg.currency),
            fmt_money(&s.today, &cfg.currency),
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: u64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

pub fn query_rows(store: &LedgerStore, cfg: &Config, sub: &clap::ArgMatches) -> Vec<ExpenseRow> {
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(cfg.display_limit);
    stats::sorted_by_date_desc(store.expenses(), limit)
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.to_string(),
            category: e.category.to_string(),
            description: e.description.clone(),
            amount: fmt_money(&e.amount, &cfg.currency),
        })
        .collect()
}

pub fn delete(store: &mut LedgerStore, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let removed = if let Some(id) = sub.get_one::<u64>("id") {
        store.delete_by_id(*id)
    } else {
        let date = parse_date(sub.get_one::<String>("date").unwrap())?;
        let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
        let amount = parse_amount(sub.get_one::<String>("amount").unwrap(), &cfg.currency)?;
        store.delete_matching(date, category, amount)
    };
    match persisted(removed)? {
        Some(Some(e)) => println!(
            "Deleted {} {} {} (id {})",
            e.date,
            e.category,
            fmt_money(&e.amount, &cfg.currency),
            e.id
        ),
        Some(None) => println!("No matching expense, nothing deleted"),
        None => {}
    }
    Ok(())
}

pub fn reset(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        println!("This deletes ALL expenses and cannot be undone; re-run with --yes to confirm");
        return Ok(());
    }
    if let Some(cleared) = persisted(store.reset())? {
        println!("All expenses have been cleared ({} removed)", cleared);
    }
    Ok(())
}
