// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use super::finish;
use crate::error::Error;
use crate::service;
use crate::store::Store;

pub fn handle(store: &mut Store, conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim().to_string();
    let today = Local::now().date_naive();
    let result = std::fs::read_to_string(&path)
        .map_err(Error::from)
        .and_then(|text| service::import_snapshot(store, conn, &text));
    finish(store, today, result)
}
