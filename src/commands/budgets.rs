// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::finish;
use crate::report;
use crate::service;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, conn, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("rm", sub)) => rm(store, conn, sub),
        _ => Ok(()),
    }
}

fn set(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let category = sub.get_one::<i64>("category").copied();
    let amount = sub
        .get_one::<String>("amount")
        .map(String::as_str)
        .unwrap_or_default();
    let period = sub.get_one::<String>("period").unwrap();
    let result = service::set_budget(store, conn, category, amount, period);
    finish(store, today, result)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let statuses = report::budget_statuses(store, today);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &statuses)? {
        return Ok(());
    }
    render(store, today);
    Ok(())
}

fn rm(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let id = *sub.get_one::<i64>("id").unwrap();
    let result = service::delete_budget(store, conn, id, sub.get_flag("yes"));
    finish(store, today, result)
}

pub fn render(store: &Store, today: NaiveDate) {
    let statuses = report::budget_statuses(store, today);
    if statuses.is_empty() {
        println!("No budgets set");
        return;
    }
    let settings = &store.settings;
    let rows = statuses
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.category_name.clone(),
                s.period.clone(),
                fmt_money(s.amount, settings),
                fmt_money(s.spent, settings),
                bar(s.percentage),
                format!("{}%", s.percentage.round_dp(1)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Category", "Period", "Budget", "Spent", "Progress", "%"],
            rows,
        )
    );
}

/// Ten-slot bar, clamped at 100% even when the number next to it runs past.
fn bar(percentage: Decimal) -> String {
    let capped = percentage.min(Decimal::ONE_HUNDRED).max(Decimal::ZERO);
    let filled = capped.trunc().to_usize().unwrap_or(0) / 10;
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}
