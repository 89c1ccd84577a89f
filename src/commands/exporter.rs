// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::store::LedgerStore;
use anyhow::Result;

pub fn handle(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    match export_expenses(store.expenses(), &fmt, Path::new(out)) {
        Ok(n) => println!("Exported {} expenses to {}", n, out),
        Err(LedgerError::EmptyLedger) => println!("No expenses to export!"),
        Err(e @ LedgerError::UnknownFormat(_)) => return Err(e.into()),
        Err(e) => {
            tracing::error!(err = %e, path = %out, "export failed");
            eprintln!("Failed to export: {}", e);
        }
    }
    Ok(())
}

/// Writes every record to `out` as `csv` (header from the field names) or
/// `json`. Returns the number of records written.
pub fn export_expenses(expenses: &[Expense], fmt: &str, out: &Path) -> LedgerResult<usize> {
    if expenses.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            for e in expenses {
                wtr.serialize(e)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(expenses)?)?;
        }
        other => return Err(LedgerError::UnknownFormat(other.to_string())),
    }
    tracing::info!(count = expenses.len(), format = fmt, path = %out.display(), "ledger exported");
    Ok(expenses.len())
}
