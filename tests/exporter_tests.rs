// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

use moneytrack::commands::exporter;
use moneytrack::models::Currency;
use moneytrack::service;
use moneytrack::store::Store;
use moneytrack::cli;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn mem_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE store(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

#[test]
fn export_snapshot_writes_dated_pretty_file() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::add_transaction(&mut store, &conn, "income", "5000", "Salary", Some(1), "2025-08-01")
        .unwrap();

    let dir = tempdir().unwrap();
    let path = service::export_snapshot(&store, dir.path()).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("money-track-export-"));
    assert!(name.ends_with(".json"));

    let contents = std::fs::read_to_string(&path).unwrap();
    // pretty-printed, with the export stamp alongside the snapshot
    assert!(contents.contains("\n  "));
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.get("exportDate").is_some());
    assert_eq!(parsed["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["categories"].as_array().unwrap().len(), 10);
}

#[test]
fn export_then_import_round_trips() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::add_transaction(&mut store, &conn, "expense", "300", "Groceries", Some(4), "2025-08-03")
        .unwrap();
    service::set_budget(&mut store, &conn, Some(4), "500", "monthly").unwrap();
    service::add_goal(&mut store, &conn, "Trip", "3000", Some("800"), "2026-02-01", None).unwrap();
    service::set_currency(&mut store, &conn, "EUR").unwrap();

    let dir = tempdir().unwrap();
    let path = service::export_snapshot(&store, dir.path()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    let other_conn = mem_conn();
    let mut other = Store::load(&other_conn).unwrap();
    service::import_snapshot(&mut other, &other_conn, &text).unwrap();

    assert_eq!(other.transactions.len(), 1);
    assert_eq!(other.transactions[0].id, store.transactions[0].id);
    assert_eq!(other.transactions[0].amount, dec("300"));
    assert_eq!(other.budgets.len(), 1);
    assert_eq!(other.budgets[0].amount, dec("500"));
    assert_eq!(other.goals.len(), 1);
    assert_eq!(other.goals[0].current_amount, dec("800"));
    assert_eq!(other.categories.len(), 10);
    assert_eq!(other.settings.currency, Currency::EUR);
}

#[test]
fn export_transactions_streams_csv() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::add_transaction(&mut store, &conn, "expense", "12.34", "Corner Shop", Some(4), "2025-01-02")
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "moneytrack",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&store, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "date,description,category,type,amount");
    let row = lines.next().unwrap();
    assert!(row.contains("2025-01-02"));
    assert!(row.contains("Corner Shop"));
    assert!(row.contains("Food & Dining"));
    assert!(row.contains("expense"));
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = mem_conn();
    let store = Store::load(&conn).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "moneytrack",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&store, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
