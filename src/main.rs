// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use spendlog::{cli, commands, config::Config, store::LedgerStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::from_matches(&matches)?;
    let mut store = LedgerStore::open(cfg.data_file.clone());

    match matches.subcommand() {
        Some(("add", sub)) => commands::expenses::add(&mut store, &cfg, sub)?,
        Some(("list", sub)) => commands::expenses::list(&store, &cfg, sub)?,
        Some(("delete", sub)) => commands::expenses::delete(&mut store, &cfg, sub)?,
        Some(("reset", sub)) => commands::expenses::reset(&mut store, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&store, &cfg, sub)?,
        Some(("report", _)) => commands::reports::report(&store, &cfg)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("categories", _)) => commands::categories::handle()?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
