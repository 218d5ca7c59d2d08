// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;

use super::finish;
use crate::report;
use crate::service;
use crate::store::Store;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, conn, sub),
        Some(("fund", sub)) => fund(store, conn, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("rm", sub)) => rm(store, conn, sub),
        _ => Ok(()),
    }
}

fn add(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let title = sub
        .get_one::<String>("title")
        .map(String::as_str)
        .unwrap_or_default();
    let target = sub
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or_default();
    let current = sub.get_one::<String>("current").map(String::as_str);
    let date = sub
        .get_one::<String>("date")
        .map(String::as_str)
        .unwrap_or_default();
    let description = sub.get_one::<String>("description").map(String::as_str);
    let result = service::add_goal(store, conn, title, target, current, date, description);
    finish(store, today, result)
}

fn fund(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = sub.get_one::<String>("amount").unwrap();
    let result = service::update_goal_progress(store, conn, id, amount);
    finish(store, today, result)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if json_flag || jsonl_flag {
        let data: Vec<_> = store
            .goals
            .iter()
            .map(|g| {
                serde_json::json!({
                    "goal": g,
                    "progress": report::goal_progress(g, today),
                })
            })
            .collect();
        maybe_print_json(json_flag, jsonl_flag, &data)?;
        return Ok(());
    }
    render(store, today);
    Ok(())
}

fn rm(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let id = *sub.get_one::<i64>("id").unwrap();
    let result = service::delete_goal(store, conn, id, sub.get_flag("yes"));
    finish(store, today, result)
}

pub fn render(store: &Store, today: NaiveDate) {
    if store.goals.is_empty() {
        println!("No goals set");
        return;
    }
    let settings = &store.settings;
    let rows = store
        .goals
        .iter()
        .map(|g| {
            let p = report::goal_progress(g, today);
            vec![
                g.id.to_string(),
                g.title.clone(),
                format!(
                    "{} / {}",
                    fmt_money(g.current_amount, settings),
                    fmt_money(g.target_amount, settings),
                ),
                format!("{}%", p.percentage.round_dp(0)),
                fmt_date(g.target_date, settings),
                p.days_left.to_string(),
                fmt_money(p.remaining, settings),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "ID",
                "Goal",
                "Saved",
                "Progress",
                "Target Date",
                "Days Left",
                "Remaining",
            ],
            rows,
        )
    );
}
