// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::models::{Budget, Category, Goal, Settings, Snapshot, Transaction, TxKind};

/// Fixed key the snapshot is stored under.
pub const STORE_KEY: &str = "money_track_data";

pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const UNKNOWN_COLOR: &str = "#6b7280";

const SEED_CATEGORIES: [(i64, &str, TxKind, &str); 10] = [
    (1, "Salary", TxKind::Income, "#10b981"),
    (2, "Freelance", TxKind::Income, "#3b82f6"),
    (3, "Investment", TxKind::Income, "#8b5cf6"),
    (4, "Food & Dining", TxKind::Expense, "#f59e0b"),
    (5, "Transportation", TxKind::Expense, "#ef4444"),
    (6, "Shopping", TxKind::Expense, "#ec4899"),
    (7, "Entertainment", TxKind::Expense, "#06b6d4"),
    (8, "Bills & Utilities", TxKind::Expense, "#84cc16"),
    (9, "Healthcare", TxKind::Expense, "#f97316"),
    (10, "Education", TxKind::Expense, "#6366f1"),
];

pub fn default_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .map(|&(id, name, kind, color)| Category {
            id,
            name: name.to_string(),
            kind,
            color: color.to_string(),
        })
        .collect()
}

/// All records plus settings, held in memory and flushed as one snapshot.
#[derive(Debug, Default)]
pub struct Store {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub categories: Vec<Category>,
    pub settings: Settings,
}

impl Store {
    /// Read the snapshot at the fixed key. Absent or unreadable data falls
    /// back to defaults, and an empty category list gets the seed list.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut store = Store::default();
        let saved: Option<String> = conn
            .query_row(
                "SELECT value FROM store WHERE key=?1",
                params![STORE_KEY],
                |r| r.get(0),
            )
            .optional()?;
        if let Some(text) = saved {
            if let Ok(snapshot) = serde_json::from_str::<Snapshot>(&text) {
                store.apply_snapshot(snapshot);
            }
        }
        if store.categories.is_empty() {
            store.categories = default_categories();
            store.save(conn)?;
        }
        Ok(store)
    }

    /// Write the full snapshot in a single upsert; no partial state reaches disk.
    pub fn save(&self, conn: &Connection) -> Result<()> {
        let json = serde_json::to_string(&self.snapshot())?;
        conn.execute(
            "INSERT INTO store(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![STORE_KEY, json],
        )?;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            transactions: self.transactions.clone(),
            budgets: self.budgets.clone(),
            goals: self.goals.clone(),
            categories: self.categories.clone(),
            settings: self.settings.to_patch(),
        }
    }

    /// Replace the collections wholesale and merge settings field by field.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.transactions = snapshot.transactions;
        self.budgets = snapshot.budgets;
        self.goals = snapshot.goals;
        self.categories = snapshot.categories;
        self.settings.merge(snapshot.settings);
    }

    /// Factory reset: every collection empty, settings back to defaults.
    pub fn reset(&mut self) {
        self.transactions.clear();
        self.budgets.clear();
        self.goals.clear();
        self.categories.clear();
        self.settings = Settings::default();
    }

    /// Millisecond timestamp bumped above the current maximum id, so two
    /// mutations inside the same millisecond still get distinct ids.
    pub fn fresh_id(&self) -> i64 {
        Utc::now().timestamp_millis().max(self.max_id() + 1)
    }

    fn max_id(&self) -> i64 {
        self.transactions
            .iter()
            .map(|t| t.id)
            .chain(self.budgets.iter().map(|b| b.id))
            .chain(self.goals.iter().map(|g| g.id))
            .chain(self.categories.iter().map(|c| c.id))
            .max()
            .unwrap_or(0)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Dangling references render as "Unknown" rather than failing.
    pub fn category_name(&self, id: i64) -> &str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn category_color(&self, id: i64) -> &str {
        self.category(id).map(|c| c.color.as_str()).unwrap_or(UNKNOWN_COLOR)
    }
}
