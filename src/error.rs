// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown category '{0}' (run `spendlog categories` for the list)")]
    UnknownCategory(String),

    #[error("No expenses recorded")]
    EmptyLedger,

    #[error("Expenses add up to zero, nothing to break down")]
    ZeroTotal,

    #[error("Failed to read ledger at {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Failed to save ledger to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode ledger: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("Unknown export format '{0}' (use csv|json)")]
    UnknownFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
