// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use super::finish;
use crate::models::{Transaction, TxKind};
use crate::report::{self, TransactionFilter};
use crate::service;
use crate::store::Store;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, conn, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("rm", sub)) => rm(store, conn, sub),
        _ => Ok(()),
    }
}

fn add(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let kind = sub
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or_default();
    let amount = sub
        .get_one::<String>("amount")
        .map(String::as_str)
        .unwrap_or_default();
    let description = sub
        .get_one::<String>("description")
        .map(String::as_str)
        .unwrap_or_default();
    let category = sub.get_one::<i64>("category").copied();
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| today.to_string());

    let result = service::add_transaction(store, conn, kind, amount, description, category, &date);
    finish(store, today, result)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let filter = TransactionFilter {
        search: sub.get_one::<String>("search").cloned(),
        category_id: sub.get_one::<i64>("category").copied(),
        kind: sub.get_one::<String>("type").and_then(|s| TxKind::parse(s)),
    };
    let data = report::filtered_transactions(store, &filter);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    let rows = data.iter().map(|t| row(store, t)).collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Category", "Type", "Amount"],
            rows,
        )
    );
    Ok(())
}

fn rm(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let id = *sub.get_one::<i64>("id").unwrap();
    let result = service::delete_transaction(store, conn, id, sub.get_flag("yes"));
    finish(store, today, result)
}

pub fn render(store: &Store, filter: &TransactionFilter) {
    let data = report::filtered_transactions(store, filter);
    if data.is_empty() {
        println!("No transactions found");
        return;
    }
    let rows = data.iter().map(|t| row(store, t)).collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Category", "Type", "Amount"],
            rows,
        )
    );
}

pub fn row(store: &Store, t: &Transaction) -> Vec<String> {
    let prefix = match t.kind {
        TxKind::Income => "+",
        TxKind::Expense => "-",
    };
    vec![
        t.id.to_string(),
        fmt_date(t.date, &store.settings),
        t.description.clone(),
        store.category_name(t.category_id).to_string(),
        t.kind.as_str().to_string(),
        format!("{}{}", prefix, fmt_money(t.amount, &store.settings)),
    ]
}
