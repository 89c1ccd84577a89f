// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub today: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// Sums amounts, saturating at the `Decimal` range.
fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Decimal {
    expenses.fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

pub fn total(expenses: &[Expense]) -> Decimal {
    sum_amounts(expenses.iter())
}

pub fn count(expenses: &[Expense]) -> usize {
    expenses.len()
}

/// Mean amount, zero for an empty ledger.
pub fn average(expenses: &[Expense]) -> Decimal {
    if expenses.is_empty() {
        return Decimal::ZERO;
    }
    total(expenses) / Decimal::from(expenses.len())
}

pub fn today_total(expenses: &[Expense], today: NaiveDate) -> Decimal {
    sum_amounts(expenses.iter().filter(|e| e.date == today))
}

pub fn summarize(expenses: &[Expense], today: NaiveDate) -> Summary {
    Summary {
        total: total(expenses),
        count: count(expenses),
        average: average(expenses),
        today: today_total(expenses, today),
    }
}

/// Per-category sums, largest first, with each category's share of the
/// grand total. Refused for an empty ledger or a zero grand total.
pub fn category_totals(expenses: &[Expense]) -> LedgerResult<Vec<CategoryTotal>> {
    if expenses.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }
    let grand = total(expenses);
    if grand.is_zero() {
        return Err(LedgerError::ZeroTotal);
    }
    let mut agg: HashMap<Category, Decimal> = HashMap::new();
    for e in expenses {
        let sum = agg.entry(e.category).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(e.amount);
    }
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let hundred = Decimal::from(100);
    Ok(items
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: amount
                .checked_div(grand)
                .and_then(|share| share.checked_mul(hundred))
                .unwrap_or(Decimal::ZERO),
        })
        .collect())
}

/// Most recent date first, insertion order kept within a date, at most
/// `limit` entries.
pub fn sorted_by_date_desc(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
