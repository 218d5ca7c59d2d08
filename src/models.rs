// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Snapshot JSON uses camelCase field names so exports written by earlier
// releases of the tracker import unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TxKind::Income),
            "expense" => Some(TxKind::Expense),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub description: String,
    pub category_id: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub period: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Display currency. Formatting only; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    INR,
    EUR,
    GBP,
    USD,
}

impl Currency {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::USD => "$",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "MM/DD/YYYY")]
    MonthFirst,
    #[serde(rename = "DD/MM/YYYY")]
    DayFirst,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MM/DD/YYYY" => Some(DateFormat::MonthFirst),
            "DD/MM/YYYY" => Some(DateFormat::DayFirst),
            "YYYY-MM-DD" => Some(DateFormat::Iso),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateFormat::MonthFirst => "MM/DD/YYYY",
            DateFormat::DayFirst => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthFirst => "%m/%d/%Y",
            DateFormat::DayFirst => "%d/%m/%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub currency: Currency,
    pub date_format: DateFormat,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: Currency::INR,
            date_format: DateFormat::DayFirst,
            theme: "light".to_string(),
        }
    }
}

impl Settings {
    /// Field-by-field merge: saved values win, absent fields keep the current value.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(date_format) = patch.date_format {
            self.date_format = date_format;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
    }

    pub fn to_patch(&self) -> SettingsPatch {
        SettingsPatch {
            currency: Some(self.currency),
            date_format: Some(self.date_format),
            theme: Some(self.theme.clone()),
        }
    }
}

/// Settings as stored on disk; every field optional so partial data merges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub currency: Option<Currency>,
    pub date_format: Option<DateFormat>,
    pub theme: Option<String>,
}

/// The full persisted state as one serializable unit. Absent collections
/// deserialize empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub categories: Vec<Category>,
    pub settings: SettingsPatch,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub export_date: DateTime<Utc>,
}
