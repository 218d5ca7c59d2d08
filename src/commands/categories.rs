// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use super::finish;
use crate::service;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let today = Local::now().date_naive();
            let name = sub
                .get_one::<String>("name")
                .map(String::as_str)
                .unwrap_or_default();
            let kind = sub
                .get_one::<String>("type")
                .map(String::as_str)
                .unwrap_or_default();
            let result = service::add_category(store, conn, name, kind);
            finish(store, today, result)
        }
        Some(("list", _)) => {
            render(store);
            Ok(())
        }
        Some(("rm", sub)) => {
            let today = Local::now().date_naive();
            let id = *sub.get_one::<i64>("id").unwrap();
            let result = service::delete_category(store, conn, id, sub.get_flag("yes"));
            finish(store, today, result)
        }
        _ => Ok(()),
    }
}

pub fn render(store: &Store) {
    if store.categories.is_empty() {
        println!("No categories");
        return;
    }
    let rows = store
        .categories
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.kind.as_str().to_string(),
                c.color.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Type", "Color"], rows));
}
