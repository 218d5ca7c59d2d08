// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod exporter;
pub mod goals;
pub mod importer;
pub mod settings;
pub mod transactions;

use chrono::NaiveDate;

use crate::error::Error;
use crate::report::TransactionFilter;
use crate::service::{Notice, NoticeKind, Outcome, View};
use crate::store::Store;

pub fn notify(notice: &Notice) {
    match notice.kind {
        NoticeKind::Error | NoticeKind::Warning => {
            eprintln!("{}: {}", notice.kind.label(), notice.message)
        }
        _ => println!("{}: {}", notice.kind.label(), notice.message),
    }
}

/// Report a mutation's outcome and re-render whatever it invalidated.
/// Validation and import failures surface as notifications; real faults
/// propagate.
pub fn finish(
    store: &Store,
    today: NaiveDate,
    result: Result<Outcome, Error>,
) -> anyhow::Result<()> {
    match result {
        Ok(outcome) => {
            if let Some(notice) = &outcome.notice {
                notify(notice);
            }
            refresh(store, today, outcome.refresh);
            Ok(())
        }
        Err(e) if e.is_user_error() => {
            notify(&Notice::error(e.to_string()));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// One render per view. The match stays exhaustive so a new view cannot be
/// missed here.
pub fn refresh(store: &Store, today: NaiveDate, views: &[View]) {
    for view in views {
        match view {
            View::Dashboard => dashboard::render(store, today),
            View::Transactions => transactions::render(store, &TransactionFilter::default()),
            View::Budget => budgets::render(store, today),
            View::Goals => goals::render(store, today),
            View::Analytics => analytics::render(store, today, 6),
            View::Settings => settings::render(store),
        }
    }
}
