// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod expenses;
pub mod exporter;
pub mod reports;

use crate::error::{LedgerError, LedgerResult};

/// Turns a failed rewrite of the ledger file into a warning. Every other
/// error is passed through.
pub fn persisted<T>(res: LedgerResult<T>) -> anyhow::Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(err @ LedgerError::Save { .. }) => {
            tracing::warn!(%err, "ledger not persisted");
            eprintln!("Warning: {}; the change was not saved", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
