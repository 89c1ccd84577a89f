// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendlog", "spendlog"));

pub const DATA_FILE: &str = "expenses.json";
pub const DEFAULT_CURRENCY: &str = "₹";
pub const DISPLAY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub currency: String,
    pub display_limit: usize,
}

impl Config {
    /// Resolves settings from the global CLI flags (which already fold in
    /// `SPENDLOG_FILE` / `SPENDLOG_CURRENCY`), falling back to the platform
    /// data dir.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let data_file = match m.get_one::<String>("file") {
            Some(p) => PathBuf::from(p),
            None => default_data_path()?,
        };
        let currency = m
            .get_one::<String>("currency")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        tracing::debug!(path = %data_file.display(), "using ledger file");
        Ok(Self {
            data_file,
            currency,
            display_limit: DISPLAY_LIMIT,
        })
    }
}

pub fn default_data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(DATA_FILE))
}
