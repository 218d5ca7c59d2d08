// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use moneytrack::commands::importer;
use moneytrack::models::{Currency, DateFormat};
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
fn invalid_json_is_rejected_and_state_kept() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::add_transaction(&mut store, &conn, "income", "10", "Keep me", Some(1), "2025-08-01")
        .unwrap();

    let err = service::import_snapshot(&mut store, &conn, "definitely not json").unwrap_err();
    assert_eq!(err.to_string(), "Invalid file format");

    assert_eq!(store.transactions.len(), 1);
    assert_eq!(store.transactions[0].description, "Keep me");
    let reloaded = Store::load(&conn).unwrap();
    assert_eq!(reloaded.transactions.len(), 1);
}

#[test]
fn import_replaces_collections_wholesale() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::add_transaction(&mut store, &conn, "income", "10", "Old", Some(1), "2025-08-01")
        .unwrap();
    service::set_budget(&mut store, &conn, Some(4), "500", "monthly").unwrap();

    let text = r#"{
        "transactions": [
            {"id": 7, "type": "expense", "amount": "25", "description": "New",
             "categoryId": 4, "date": "2025-08-02", "createdAt": "2025-08-02T08:00:00Z"}
        ]
    }"#;
    let outcome = service::import_snapshot(&mut store, &conn, text).unwrap();
    assert_eq!(outcome.notice.unwrap().message, "Data imported successfully!");

    // missing collections default to empty, including categories
    assert_eq!(store.transactions.len(), 1);
    assert_eq!(store.transactions[0].description, "New");
    assert!(store.budgets.is_empty());
    assert!(store.goals.is_empty());
    assert!(store.categories.is_empty());

    // the next load re-seeds the empty category list
    let reloaded = Store::load(&conn).unwrap();
    assert_eq!(reloaded.categories.len(), 10);
    assert_eq!(reloaded.transactions.len(), 1);
}

#[test]
fn import_merges_settings_field_by_field() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::set_date_format(&mut store, &conn, "YYYY-MM-DD").unwrap();

    let text = r#"{"settings": {"currency": "EUR"}}"#;
    service::import_snapshot(&mut store, &conn, text).unwrap();
    assert_eq!(store.settings.currency, Currency::EUR);
    assert_eq!(store.settings.date_format, DateFormat::Iso);
}

#[test]
fn import_accepts_legacy_export_shape() {
    // camelCase keys, numeric amounts, and an exportDate stamp
    let text = r##"{
        "transactions": [
            {"id": 1, "type": "income", "amount": 5000, "description": "Monthly Salary",
             "categoryId": 1, "date": "2025-08-01", "createdAt": "2025-08-01T10:00:00.000Z"}
        ],
        "budgets": [
            {"id": 2, "categoryId": 4, "amount": 500, "period": "monthly",
             "createdAt": "2025-08-01T10:00:00.000Z"}
        ],
        "goals": [
            {"id": 3, "title": "Emergency Fund", "targetAmount": 10000, "currentAmount": 2500,
             "targetDate": "2026-08-01", "description": "Safety net",
             "createdAt": "2025-08-01T10:00:00.000Z"}
        ],
        "categories": [
            {"id": 1, "name": "Salary", "type": "income", "color": "#10b981"}
        ],
        "settings": {"currency": "USD", "dateFormat": "MM/DD/YYYY", "theme": "dark"},
        "exportDate": "2025-08-06T00:00:00.000Z"
    }"##;

    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();
    service::import_snapshot(&mut store, &conn, text).unwrap();

    assert_eq!(store.transactions[0].amount, dec("5000"));
    assert_eq!(store.budgets[0].amount, dec("500"));
    assert_eq!(store.goals[0].target_amount, dec("10000"));
    assert_eq!(store.goals[0].description.as_deref(), Some("Safety net"));
    assert_eq!(store.categories.len(), 1);
    assert_eq!(store.settings.currency, Currency::USD);
    assert_eq!(store.settings.date_format, DateFormat::MonthFirst);
    assert_eq!(store.settings.theme, "dark");
}

#[test]
fn importer_trims_cli_path_argument() {
    let conn = mem_conn();
    let mut store = Store::load(&conn).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"transactions": [{{"id": 9, "type": "expense", "amount": "5", "description": "Shop",
            "categoryId": 4, "date": "2025-02-03", "createdAt": "2025-02-03T09:00:00Z"}}]}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let padded = format!("  {}  ", path);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["moneytrack", "import", "--path", &padded]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&mut store, &conn, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    assert_eq!(store.transactions.len(), 1);
    assert_eq!(store.transactions[0].description, "Shop");
}
