//! Explicit zero-default aggregate functions.
//!
//! Every "sum or 0" in the system is one of these named functions: each
//! returns the additive identity over an empty slice so callers can compose
//! results arithmetically without null handling.

use rust_decimal::Decimal;

use aqualedger_core::metrics::{classify_expense, sale_total, ExpenseCategory};

use crate::entities::{expenses, feed_records, fish_sales, harvests, mortality_records, stocks};

/// Σ `quantity_dead` over mortality records.
#[must_use]
pub fn total_mortality(rows: &[mortality_records::Model]) -> i64 {
    rows.iter().map(|r| i64::from(r.quantity_dead)).sum()
}

/// Σ `quantity_kg` over harvests.
#[must_use]
pub fn total_harvest(rows: &[harvests::Model]) -> i64 {
    rows.iter().map(|r| i64::from(r.quantity_kg)).sum()
}

/// Σ `quantity_kg` over sales.
#[must_use]
pub fn total_sold(rows: &[fish_sales::Model]) -> i64 {
    rows.iter().map(|r| i64::from(r.quantity_kg)).sum()
}

/// Σ `quantity_kg × price_per_kg` over sales, recomputed from source
/// columns rather than the stored display total.
#[must_use]
pub fn total_sale_revenue(rows: &[fish_sales::Model]) -> Decimal {
    rows.iter()
        .map(|r| sale_total(i64::from(r.quantity_kg), r.price_per_kg))
        .sum()
}

/// Σ `cost` over feed records.
#[must_use]
pub fn total_feed_cost(rows: &[feed_records::Model]) -> Decimal {
    rows.iter().map(|r| r.cost).sum()
}

/// Σ `quantity_kg` over feed records.
#[must_use]
pub fn total_feed_quantity(rows: &[feed_records::Model]) -> Decimal {
    rows.iter().map(|r| r.quantity_kg).sum()
}

/// Σ `amount` over expenses.
#[must_use]
pub fn total_expense(rows: &[expenses::Model]) -> Decimal {
    rows.iter().map(|r| r.amount).sum()
}

/// Σ `cost` over stocks.
#[must_use]
pub fn total_stock_cost(rows: &[stocks::Model]) -> Decimal {
    rows.iter().map(|r| r.cost).sum()
}

/// Splits expenses into (medicine, other) totals by description.
#[must_use]
pub fn split_expenses(rows: &[expenses::Model]) -> (Decimal, Decimal) {
    let mut medicine = Decimal::ZERO;
    let mut other = Decimal::ZERO;
    for row in rows {
        match classify_expense(&row.description) {
            ExpenseCategory::Medicine => medicine += row.amount,
            ExpenseCategory::Other => other += row.amount,
        }
    }
    (medicine, other)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
