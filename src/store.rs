// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON-file backed expense ledger.
//!
//! The whole record list lives in memory and the file is rewritten in full
//! after every mutation. Ids only ever grow, across deletes and resets. A
//! failed rewrite leaves the in-memory list mutated and is reported to the
//! caller as [`LedgerError::Save`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense};

/// Largest amount difference still treated as the same expense when
/// matching by fields.
pub fn match_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// On-disk layout. `next_id` is the id high-water mark, so ids of deleted
/// records are never handed out again. A bare array is the older layout.
#[derive(Deserialize)]
#[serde(untagged)]
enum LedgerFile {
    Tracked { next_id: u64, expenses: Vec<Expense> },
    Legacy(Vec<Expense>),
}

#[derive(Serialize)]
struct LedgerFileRef<'a> {
    next_id: u64,
    expenses: &'a [Expense],
}

fn read_file(path: &Path) -> LedgerResult<(Vec<Expense>, u64)> {
    if !path.exists() {
        return Ok((Vec::new(), 0));
    }
    let load_err = |reason: String| LedgerError::Load {
        path: path.to_path_buf(),
        reason,
    };
    let raw = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    match serde_json::from_str::<LedgerFile>(&raw).map_err(|e| load_err(e.to_string()))? {
        LedgerFile::Tracked { next_id, expenses } => Ok((expenses, next_id)),
        LedgerFile::Legacy(expenses) => Ok((expenses, 0)),
    }
}

fn write_file(path: &Path, expenses: &[Expense], next_id: u64) -> LedgerResult<()> {
    let body = serde_json::to_string_pretty(&LedgerFileRef { next_id, expenses })?;
    let write = || -> std::io::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, body)
    };
    write().map_err(|source| LedgerError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the ledger file, returning the parse or I/O failure.
/// A missing file is an empty ledger.
pub fn try_load(path: &Path) -> LedgerResult<Vec<Expense>> {
    read_file(path).map(|(expenses, _)| expenses)
}

/// Reads the ledger file; anything unreadable counts as no prior data.
pub fn load(path: &Path) -> Vec<Expense> {
    match try_load(path) {
        Ok(expenses) => expenses,
        Err(err) => {
            tracing::warn!(%err, "starting with an empty ledger");
            Vec::new()
        }
    }
}

/// Overwrites the ledger file with `expenses`.
pub fn save(path: &Path, expenses: &[Expense]) -> LedgerResult<()> {
    write_file(path, expenses, max_id(expenses) + 1)
}

fn max_id(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|e| e.id).max().unwrap_or(0)
}

#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    next_id: u64,
}

impl LedgerStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (mut expenses, stored_next) = read_file(&path).unwrap_or_else(|err| {
            tracing::warn!(%err, "starting with an empty ledger");
            (Vec::new(), 0)
        });
        let mut next_id = stored_next.max(max_id(&expenses) + 1);
        for e in expenses.iter_mut().filter(|e| e.id == 0) {
            e.id = next_id;
            next_id += 1;
        }
        tracing::debug!(count = expenses.len(), path = %path.display(), "ledger opened");
        Self {
            path,
            expenses,
            next_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn save(&self) -> LedgerResult<()> {
        write_file(&self.path, &self.expenses, self.next_id)
    }

    /// Appends `expense` under a fresh id and persists. Returns the id.
    pub fn add(&mut self, mut expense: Expense) -> LedgerResult<u64> {
        expense.id = self.next_id;
        self.next_id += 1;
        let id = expense.id;
        tracing::info!(id, amount = %expense.amount, category = %expense.category, "expense added");
        self.expenses.push(expense);
        self.save()?;
        Ok(id)
    }

    /// Removes the first record, in insertion order, on `date` in
    /// `category` whose amount is within [`match_tolerance`] of `amount`.
    /// Nothing matching is not an error.
    pub fn delete_matching(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> LedgerResult<Option<Expense>> {
        let tolerance = match_tolerance();
        let pos = self.expenses.iter().position(|e| {
            e.date == date
                && e.category == category
                && e
                    .amount
                    .checked_sub(amount)
                    .is_some_and(|d| d.abs() < tolerance)
        });
        self.remove_at(pos)
    }

    pub fn delete_by_id(&mut self, id: u64) -> LedgerResult<Option<Expense>> {
        let pos = self.expenses.iter().position(|e| e.id == id);
        self.remove_at(pos)
    }

    fn remove_at(&mut self, pos: Option<usize>) -> LedgerResult<Option<Expense>> {
        let Some(pos) = pos else {
            tracing::debug!("no matching expense, nothing deleted");
            return Ok(None);
        };
        let removed = self.expenses.remove(pos);
        tracing::info!(id = removed.id, "expense deleted");
        self.save()?;
        Ok(Some(removed))
    }

    /// Drops every record and persists the empty ledger.
    pub fn reset(&mut self) -> LedgerResult<usize> {
        let cleared = self.expenses.len();
        self.expenses.clear();
        tracing::info!(cleared, "ledger reset");
        self.save()?;
        Ok(cleared)
    }
}
