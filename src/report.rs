// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derivations: pure read-only aggregates over a store snapshot and a
//! reference date. Empty collections produce zero-valued results, never
//! errors, and dangling category references count toward sums under
//! "Unknown".

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Goal, Transaction, TxKind};
use crate::store::{Store, UNKNOWN_CATEGORY, UNKNOWN_COLOR};
use crate::utils::{month_label, months_back};

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    /// balance/income as a percentage, one decimal place; 0 when income is 0.
    pub savings_rate: Decimal,
}

pub fn monthly_summary(store: &Store, today: NaiveDate) -> MonthlySummary {
    let (year, month) = (today.year(), today.month());
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in store.transactions.iter().filter(|t| in_month(t.date, year, month)) {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expense += t.amount,
        }
    }
    let balance = income - expense;
    let savings_rate = if income > Decimal::ZERO {
        (balance / income * Decimal::ONE_HUNDRED).round_dp(1)
    } else {
        Decimal::ZERO
    };
    MonthlySummary {
        income,
        expense,
        balance,
        savings_rate,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    /// Sum over every budget, whatever its period says.
    pub total_budget: Decimal,
    pub monthly_spent: Decimal,
    pub remaining: Decimal,
}

pub fn budget_overview(store: &Store, today: NaiveDate) -> BudgetOverview {
    let (year, month) = (today.year(), today.month());
    let mut total_budget = Decimal::ZERO;
    for b in &store.budgets {
        total_budget += b.amount;
    }
    let mut monthly_spent = Decimal::ZERO;
    for t in &store.transactions {
        if t.kind == TxKind::Expense && in_month(t.date, year, month) {
            monthly_spent += t.amount;
        }
    }
    BudgetOverview {
        total_budget,
        monthly_spent,
        remaining: total_budget - monthly_spent,
    }
}

/// Expense total for one category in the current calendar month.
pub fn category_spent(store: &Store, category_id: i64, today: NaiveDate) -> Decimal {
    let (year, month) = (today.year(), today.month());
    let mut spent = Decimal::ZERO;
    for t in &store.transactions {
        if t.category_id == category_id
            && t.kind == TxKind::Expense
            && in_month(t.date, year, month)
        {
            spent += t.amount;
        }
    }
    spent
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub id: i64,
    pub category_name: String,
    pub color: String,
    pub period: String,
    pub amount: Decimal,
    pub spent: Decimal,
    /// Uncapped; the progress bar clamps at 100 while the number runs past it.
    pub percentage: Decimal,
    pub over_budget: bool,
}

pub fn budget_statuses(store: &Store, today: NaiveDate) -> Vec<BudgetStatus> {
    store
        .budgets
        .iter()
        .map(|b| {
            let spent = category_spent(store, b.category_id, today);
            let percentage = if b.amount.is_zero() {
                Decimal::ZERO
            } else {
                spent / b.amount * Decimal::ONE_HUNDRED
            };
            BudgetStatus {
                id: b.id,
                category_name: store.category_name(b.category_id).to_string(),
                color: store.category_color(b.category_id).to_string(),
                period: b.period.clone(),
                amount: b.amount,
                spent,
                percentage,
                over_budget: spent > b.amount,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub percentage: Decimal,
    /// Whole days until the target date, floored at 0.
    pub days_left: i64,
    pub remaining: Decimal,
    pub achieved: bool,
}

pub fn goal_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let percentage = if goal.target_amount.is_zero() {
        Decimal::ZERO
    } else {
        goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED
    };
    GoalProgress {
        percentage,
        days_left: (goal.target_date - today).num_days().max(0),
        remaining: goal.target_amount - goal.current_amount,
        achieved: goal.current_amount >= goal.target_amount,
    }
}

/// Latest five transactions by date; ties keep their stored order.
pub fn recent_transactions(store: &Store) -> Vec<&Transaction> {
    let mut txs: Vec<&Transaction> = store.transactions.iter().collect();
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    txs.truncate(5);
    txs
}

#[derive(Debug, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring over description or category name.
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub kind: Option<TxKind>,
}

pub fn filtered_transactions<'a>(
    store: &'a Store,
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut out: Vec<&Transaction> = store.transactions.iter().collect();
    if let Some(term) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let term = term.to_lowercase();
        out.retain(|t| {
            t.description.to_lowercase().contains(&term)
                || store
                    .category(t.category_id)
                    .map(|c| c.name.to_lowercase().contains(&term))
                    .unwrap_or(false)
        });
    }
    if let Some(id) = filter.category_id {
        out.retain(|t| t.category_id == id);
    }
    if let Some(kind) = filter.kind {
        out.retain(|t| t.kind == kind);
    }
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

#[derive(Debug, Serialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
}

/// Income/expense totals for the last `months` calendar months ending with
/// the current one, oldest first. Months without activity stay zero-filled.
pub fn trend_series(store: &Store, months: usize, today: NaiveDate) -> TrendSeries {
    let mut labels = Vec::with_capacity(months);
    let mut income = Vec::with_capacity(months);
    let mut expense = Vec::with_capacity(months);
    for back in (0..months).rev() {
        let (year, month) = months_back(today, back as u32);
        let mut inc = Decimal::ZERO;
        let mut exp = Decimal::ZERO;
        for t in store.transactions.iter().filter(|t| in_month(t.date, year, month)) {
            match t.kind {
                TxKind::Income => inc += t.amount,
                TxKind::Expense => exp += t.amount,
            }
        }
        labels.push(month_label(year, month));
        income.push(inc);
        expense.push(exp);
    }
    TrendSeries {
        labels,
        income,
        expense,
    }
}

#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub color: String,
    pub amount: Decimal,
}

/// Expense totals grouped by category name (same-name categories merge),
/// ordered by first appearance. Categories without expense activity are
/// omitted rather than zero-filled.
pub fn category_breakdown(store: &Store) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for t in store.transactions.iter().filter(|t| t.kind == TxKind::Expense) {
        let (name, color) = match store.category(t.category_id) {
            Some(c) => (c.name.as_str(), c.color.as_str()),
            None => (UNKNOWN_CATEGORY, UNKNOWN_COLOR),
        };
        match slices.iter_mut().find(|s| s.name == name) {
            Some(slice) => slice.amount += t.amount,
            None => slices.push(CategorySlice {
                name: name.to_string(),
                color: color.to_string(),
                amount: t.amount,
            }),
        }
    }
    slices
}
