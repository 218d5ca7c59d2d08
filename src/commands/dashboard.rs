// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use super::transactions;
use crate::report;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if json_flag || jsonl_flag {
        let payload = json!({
            "summary": report::monthly_summary(store, today),
            "budget": report::budget_overview(store, today),
            "recent": report::recent_transactions(store),
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }
    render(store, today);
    Ok(())
}

pub fn render(store: &Store, today: NaiveDate) {
    let summary = report::monthly_summary(store, today);
    let overview = report::budget_overview(store, today);
    let settings = &store.settings;
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Balance", "Savings Rate"],
            vec![vec![
                fmt_money(summary.income, settings),
                fmt_money(summary.expense, settings),
                fmt_money(summary.balance, settings),
                format!("{}%", summary.savings_rate),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Total Budget", "Spent", "Remaining"],
            vec![vec![
                fmt_money(overview.total_budget, settings),
                fmt_money(overview.monthly_spent, settings),
                fmt_money(overview.remaining, settings),
            ]],
        )
    );
    let recent = report::recent_transactions(store);
    if recent.is_empty() {
        println!("No transactions yet");
        return;
    }
    let rows = recent.iter().map(|t| transactions::row(store, t)).collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Category", "Type", "Amount"],
            rows,
        )
    );
}
