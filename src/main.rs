// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneytrack::{cli, commands, db, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let mut store = Store::load(&conn)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store initialized at {}", db::db_path()?.display());
        }
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, &conn, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut store, &conn, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut store, &conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, &conn, sub)?,
        Some(("analytics", sub)) => commands::analytics::handle(&store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut store, &conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, &conn, sub)?,
        Some(("clear", sub)) => commands::settings::clear(&mut store, &conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
