// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendlog::{cli, commands::exporter, Category, Expense, LedgerError, LedgerStore};
use tempfile::tempdir;

fn seeded(path: &std::path::Path) -> LedgerStore {
    let mut ledger = LedgerStore::open(path);
    let mut e = Expense::new(
        "12.34".parse().unwrap(),
        Category::Groceries,
        "Corner shop, weekly run",
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    );
    e.timestamp = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();
    ledger.add(e).unwrap();
    ledger
}

#[test]
fn export_csv_has_field_header() {
    let dir = tempdir().unwrap();
    let ledger = seeded(&dir.path().join("e.json"));
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "spendlog", "export", "--format", "csv", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,amount,category,description,date,timestamp"
    );
    assert_eq!(
        lines.next().unwrap(),
        "1,12.34,Groceries,\"Corner shop, weekly run\",2025-01-02,2025-01-02T08:15:00"
    );
    assert!(lines.next().is_none());
}

#[test]
fn export_json_matches_ledger() {
    let dir = tempdir().unwrap();
    let ledger = seeded(&dir.path().join("e.json"));
    let out_path = dir.path().join("export.json");

    let n = exporter::export_expenses(ledger.expenses(), "json", &out_path).unwrap();
    assert_eq!(n, 1);
    let parsed: Vec<Expense> =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed, ledger.expenses());
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let ledger = seeded(&dir.path().join("e.json"));
    let out_path = dir.path().join("export.xml");

    let res = exporter::export_expenses(ledger.expenses(), "xml", &out_path);
    assert!(matches!(res, Err(LedgerError::UnknownFormat(_))));
    assert!(!out_path.exists());
}

#[test]
fn export_refused_for_empty_ledger() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let res = exporter::export_expenses(&[], "csv", &out_path);
    assert!(matches!(res, Err(LedgerError::EmptyLedger)));
    assert!(!out_path.exists());
}

#[test]
fn export_write_failure_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let ledger = seeded(&dir.path().join("e.json"));
    // The target is an existing directory, so the file cannot be created.
    let out_str = dir.path().to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "spendlog", "export", "--format", "csv", "--out", &out_str,
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    assert!(exporter::handle(&ledger, export_m).is_ok());
}

#[test]
fn export_handler_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let ledger = seeded(&dir.path().join("e.json"));
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "spendlog", "export", "--format", "xml", "--out", &out_str,
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    assert!(exporter::handle(&ledger, export_m).is_err());
    assert!(!out_path.exists());
}
