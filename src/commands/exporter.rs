// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use super::notify;
use crate::service::{self, Notice};
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("snapshot", sub)) => export_snapshot(store, sub),
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_snapshot(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").map(String::as_str).unwrap_or(".");
    let path = service::export_snapshot(store, Path::new(out))?;
    notify(&Notice::success("Data exported successfully!"));
    println!("Wrote {}", path.display());
    Ok(())
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "description", "category", "type", "amount"])?;
            for t in &store.transactions {
                wtr.write_record([
                    t.date.to_string(),
                    t.description.clone(),
                    store.category_name(t.category_id).to_string(),
                    t.kind.as_str().to_string(),
                    t.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = store
                .transactions
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "date": t.date,
                        "description": t.description,
                        "category": store.category_name(t.category_id),
                        "type": t.kind,
                        "amount": t.amount,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => anyhow::bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
