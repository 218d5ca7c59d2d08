// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Mutations: validate raw input, mutate the store, flush the snapshot, and
//! report which views need a refresh. Amount fields use falsy-check
//! semantics: unparseable input and exactly zero are both rejected as
//! missing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{
    Budget, Category, Currency, DateFormat, ExportFile, Goal, Snapshot, Transaction, TxKind,
};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal};

const MSG_FILL_ALL: &str = "Please fill in all fields";
const MSG_FILL_REQUIRED: &str = "Please fill in all required fields";

const PALETTE: [&str; 17] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899",
    "#f43f5e",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Transactions,
    Budget,
    Goals,
    Analytics,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn label(self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
            NoticeKind::Warning => "Warning",
            NoticeKind::Info => "Info",
        }
    }
}

#[derive(Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// What a mutation produced: an optional user notification plus the views
/// whose rendering it invalidated.
#[derive(Debug)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub refresh: &'static [View],
}

impl Outcome {
    fn notify(kind: NoticeKind, message: &str, refresh: &'static [View]) -> Self {
        Outcome {
            notice: Some(Notice {
                kind,
                message: message.to_string(),
            }),
            refresh,
        }
    }

    fn silent(refresh: &'static [View]) -> Self {
        Outcome {
            notice: None,
            refresh,
        }
    }

    fn cancelled() -> Self {
        Outcome::notify(NoticeKind::Warning, "Operation cancelled", &[])
    }
}

/// Positive decimal or nothing; zero counts as missing.
fn parse_amount(s: &str) -> Option<Decimal> {
    let amount = parse_decimal(s.trim()).ok()?;
    if amount > Decimal::ZERO { Some(amount) } else { None }
}

pub fn add_transaction(
    store: &mut Store,
    conn: &Connection,
    kind: &str,
    amount: &str,
    description: &str,
    category_id: Option<i64>,
    date: &str,
) -> Result<Outcome> {
    let kind = TxKind::parse(kind).ok_or(Error::Validation(MSG_FILL_ALL))?;
    let amount = parse_amount(amount).ok_or(Error::Validation(MSG_FILL_ALL))?;
    if description.is_empty() {
        return Err(Error::Validation(MSG_FILL_ALL));
    }
    let category_id = category_id.ok_or(Error::Validation(MSG_FILL_ALL))?;
    let date = parse_date(date).map_err(|_| Error::Validation(MSG_FILL_ALL))?;

    let transaction = Transaction {
        id: store.fresh_id(),
        kind,
        amount,
        description: description.to_string(),
        category_id,
        date,
        created_at: Utc::now(),
    };
    store.transactions.push(transaction);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Transaction added successfully!",
        &[View::Dashboard, View::Transactions],
    ))
}

pub fn delete_transaction(
    store: &mut Store,
    conn: &Connection,
    id: i64,
    confirmed: bool,
) -> Result<Outcome> {
    if !confirmed {
        return Ok(Outcome::cancelled());
    }
    store.transactions.retain(|t| t.id != id);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Transaction deleted successfully!",
        &[View::Dashboard, View::Transactions],
    ))
}

/// One budget per (category, period) pair: a second set overwrites the
/// amount in place instead of inserting a duplicate.
pub fn set_budget(
    store: &mut Store,
    conn: &Connection,
    category_id: Option<i64>,
    amount: &str,
    period: &str,
) -> Result<Outcome> {
    let category_id = category_id.ok_or(Error::Validation(MSG_FILL_ALL))?;
    let amount = parse_amount(amount).ok_or(Error::Validation(MSG_FILL_ALL))?;
    if period.is_empty() {
        return Err(Error::Validation(MSG_FILL_ALL));
    }

    let existing = store
        .budgets
        .iter()
        .position(|b| b.category_id == category_id && b.period == period);
    let message = match existing {
        Some(i) => {
            store.budgets[i].amount = amount;
            "Budget updated successfully!"
        }
        None => {
            let budget = Budget {
                id: store.fresh_id(),
                category_id,
                amount,
                period: period.to_string(),
                created_at: Utc::now(),
            };
            store.budgets.push(budget);
            "Budget created successfully!"
        }
    };
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        message,
        &[View::Budget],
    ))
}

pub fn delete_budget(
    store: &mut Store,
    conn: &Connection,
    id: i64,
    confirmed: bool,
) -> Result<Outcome> {
    if !confirmed {
        return Ok(Outcome::cancelled());
    }
    store.budgets.retain(|b| b.id != id);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Budget deleted successfully!",
        &[View::Budget],
    ))
}

pub fn add_goal(
    store: &mut Store,
    conn: &Connection,
    title: &str,
    target_amount: &str,
    current_amount: Option<&str>,
    target_date: &str,
    description: Option<&str>,
) -> Result<Outcome> {
    if title.is_empty() {
        return Err(Error::Validation(MSG_FILL_REQUIRED));
    }
    let target_amount =
        parse_amount(target_amount).ok_or(Error::Validation(MSG_FILL_REQUIRED))?;
    let target_date = parse_date(target_date).map_err(|_| Error::Validation(MSG_FILL_REQUIRED))?;
    // Unparseable starting amounts fall back to zero; over-target creation is
    // allowed and simply counts as already achieved.
    let current_amount = current_amount
        .and_then(|s| parse_decimal(s.trim()).ok())
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);

    let goal = Goal {
        id: store.fresh_id(),
        title: title.to_string(),
        target_amount,
        current_amount,
        target_date,
        description: description.filter(|d| !d.is_empty()).map(str::to_string),
        created_at: Utc::now(),
    };
    store.goals.push(goal);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Goal created successfully!",
        &[View::Goals],
    ))
}

/// Adds to the running amount, clamped at the target. Missing goals are a
/// silent no-op.
pub fn update_goal_progress(
    store: &mut Store,
    conn: &Connection,
    id: i64,
    amount: &str,
) -> Result<Outcome> {
    let delta = parse_decimal(amount.trim()).map_err(|_| Error::Validation(MSG_FILL_ALL))?;
    let Some(i) = store.goals.iter().position(|g| g.id == id) else {
        return Ok(Outcome::silent(&[]));
    };
    let goal = &mut store.goals[i];
    goal.current_amount = (goal.current_amount + delta).min(goal.target_amount);
    store.save(conn)?;
    Ok(Outcome::silent(&[View::Goals]))
}

pub fn delete_goal(
    store: &mut Store,
    conn: &Connection,
    id: i64,
    confirmed: bool,
) -> Result<Outcome> {
    if !confirmed {
        return Ok(Outcome::cancelled());
    }
    store.goals.retain(|g| g.id != id);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Goal deleted successfully!",
        &[View::Goals],
    ))
}

pub fn add_category(
    store: &mut Store,
    conn: &Connection,
    name: &str,
    kind: &str,
) -> Result<Outcome> {
    if name.is_empty() {
        return Err(Error::Validation(MSG_FILL_ALL));
    }
    let kind = TxKind::parse(kind).ok_or(Error::Validation(MSG_FILL_ALL))?;
    let id = store.fresh_id();
    let category = Category {
        id,
        name: name.to_string(),
        kind,
        color: palette_color(id).to_string(),
    };
    store.categories.push(category);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Category added successfully!",
        &[View::Settings],
    ))
}

/// Removing a category cascades: transactions and budgets referencing it go
/// with it.
pub fn delete_category(
    store: &mut Store,
    conn: &Connection,
    id: i64,
    confirmed: bool,
) -> Result<Outcome> {
    if !confirmed {
        return Ok(Outcome::cancelled());
    }
    store.categories.retain(|c| c.id != id);
    store.transactions.retain(|t| t.category_id != id);
    store.budgets.retain(|b| b.category_id != id);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Category deleted successfully!",
        &[View::Dashboard, View::Settings],
    ))
}

pub fn set_currency(store: &mut Store, conn: &Connection, code: &str) -> Result<Outcome> {
    let currency = Currency::parse(code).ok_or(Error::Validation("Unsupported currency"))?;
    store.settings.currency = currency;
    store.save(conn)?;
    Ok(Outcome::silent(&[View::Dashboard]))
}

pub fn set_date_format(store: &mut Store, conn: &Connection, format: &str) -> Result<Outcome> {
    let date_format =
        DateFormat::parse(format).ok_or(Error::Validation("Unsupported date format"))?;
    store.settings.date_format = date_format;
    store.save(conn)?;
    Ok(Outcome::silent(&[View::Dashboard]))
}

pub fn clear_all(store: &mut Store, conn: &Connection, confirmed: bool) -> Result<Outcome> {
    if !confirmed {
        return Ok(Outcome::cancelled());
    }
    store.reset();
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "All data cleared successfully!",
        &[View::Dashboard],
    ))
}

/// Parse a snapshot file's contents and swap it in wholesale; settings merge
/// field by field. Unparseable input leaves the store untouched.
pub fn import_snapshot(store: &mut Store, conn: &Connection, text: &str) -> Result<Outcome> {
    let snapshot: Snapshot = serde_json::from_str(text).map_err(|_| Error::InvalidImport)?;
    store.apply_snapshot(snapshot);
    store.save(conn)?;
    Ok(Outcome::notify(
        NoticeKind::Success,
        "Data imported successfully!",
        &[View::Dashboard],
    ))
}

/// Write the snapshot plus an export timestamp, pretty-printed, to
/// `money-track-export-<date>.json` under `out_dir`.
pub fn export_snapshot(store: &Store, out_dir: &Path) -> Result<PathBuf> {
    let file = ExportFile {
        snapshot: store.snapshot(),
        export_date: Utc::now(),
    };
    let name = format!("money-track-export-{}.json", chrono::Local::now().date_naive());
    let path = out_dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&file)?)?;
    Ok(path)
}

fn palette_color(id: i64) -> &'static str {
    PALETTE[(id.unsigned_abs() as usize) % PALETTE.len()]
}
