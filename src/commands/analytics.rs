// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::report;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let months = *m.get_one::<usize>("months").unwrap_or(&6);
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if json_flag || jsonl_flag {
        let payload = serde_json::json!({
            "trend": report::trend_series(store, months, today),
            "breakdown": report::category_breakdown(store),
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }
    render(store, today, months);
    Ok(())
}

pub fn render(store: &Store, today: NaiveDate, months: usize) {
    let trend = report::trend_series(store, months, today);
    let settings = &store.settings;
    let rows: Vec<Vec<String>> = trend
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            vec![
                label.clone(),
                fmt_money(trend.income[i], settings),
                fmt_money(trend.expense[i], settings),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));

    let breakdown = report::category_breakdown(store);
    if breakdown.is_empty() {
        println!("No expense activity yet");
        return;
    }
    let mut total = Decimal::ZERO;
    for slice in &breakdown {
        total += slice.amount;
    }
    let rows = breakdown
        .iter()
        .map(|slice| {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (slice.amount / total * Decimal::ONE_HUNDRED).round_dp(1)
            };
            vec![
                slice.name.clone(),
                fmt_money(slice.amount, settings),
                format!("{}%", share),
                slice.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], rows)
    );
}
