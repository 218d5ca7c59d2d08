// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use super::{categories, finish};
use crate::service;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("currency", sub)) => {
            let today = Local::now().date_naive();
            let code = sub.get_one::<String>("code").unwrap();
            let result = service::set_currency(store, conn, code);
            finish(store, today, result)
        }
        Some(("date-format", sub)) => {
            let today = Local::now().date_naive();
            let format = sub.get_one::<String>("format").unwrap();
            let result = service::set_date_format(store, conn, format);
            finish(store, today, result)
        }
        // bare `settings` and `settings show` both print the current state
        _ => {
            render(store);
            Ok(())
        }
    }
}

pub fn clear(store: &mut Store, conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let result = service::clear_all(store, conn, sub.get_flag("yes"));
    finish(store, today, result)
}

pub fn render(store: &Store) {
    println!(
        "{}",
        pretty_table(
            &["Currency", "Date Format", "Theme"],
            vec![vec![
                store.settings.currency.as_str().to_string(),
                store.settings.date_format.as_str().to_string(),
                store.settings.theme.clone(),
            ]],
        )
    );
    categories::render(store);
}
