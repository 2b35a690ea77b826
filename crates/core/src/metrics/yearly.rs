//! Yearly financial rollup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::finance;

/// Expense classification for yearly reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Medicine and treatment purchases.
    Medicine,
    /// Everything else (electricity, labor, maintenance, ...).
    Other,
}

/// Classifies an expense by its free-text description.
///
/// A case-insensitive "medicine" substring match, faithful to how the
/// ledger has always been categorized. Descriptions are human-entered, so
/// this is brittle; it lives here so an explicit category column later is
/// a one-site change.
#[must_use]
pub fn classify_expense(description: &str) -> ExpenseCategory {
    if description.to_lowercase().contains("medicine") {
        ExpenseCategory::Medicine
    } else {
        ExpenseCategory::Other
    }
}

/// Aggregated figures for one calendar year.
///
/// Each total is a zero-default sum filtered by the owning entity's own
/// date field. Derived figures (investment, net profit, ROI) are methods so
/// the stored fields stay independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTotals {
    /// Calendar year the figures cover.
    pub year: i32,
    /// Σ stock cost for stocks stocked in the year.
    pub total_fish_purchase: Decimal,
    /// Σ feed cost for feed records dated in the year.
    pub total_feed_purchase: Decimal,
    /// Σ medicine-classified expenses of cycles stocked in the year.
    pub total_medicine_purchase: Decimal,
    /// Σ other expenses of cycles stocked in the year.
    pub total_other_expenses: Decimal,
    /// Σ sale totals for sales dated in the year.
    pub total_sales_revenue: Decimal,
}

impl YearlyTotals {
    /// Total capital invested: fish + feed + medicine + other.
    #[must_use]
    pub fn total_investment(&self) -> Decimal {
        self.total_fish_purchase
            + self.total_feed_purchase
            + self.total_medicine_purchase
            + self.total_other_expenses
    }

    /// Net profit: sales revenue minus total investment. Exact, unrounded.
    #[must_use]
    pub fn net_profit(&self) -> Decimal {
        finance::profit(self.total_sales_revenue, self.total_investment())
    }

    /// Return on investment as a percentage, 2 dp; 0 when nothing was invested.
    #[must_use]
    pub fn roi_percentage(&self) -> Decimal {
        finance::roi_percentage(self.net_profit(), self.total_investment())
    }
}
