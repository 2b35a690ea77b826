//! Production and financial metrics.
//!
//! Stateless functions over already-aggregated ledger figures. Every ratio
//! metric is zero-guarded: division by an empty denominator yields zero,
//! never an error. Sums over empty sets are the caller's concern and must
//! arrive here as the additive identity.

use rust_decimal::Decimal;

pub mod finance;
pub mod production;
pub mod yearly;

#[cfg(test)]
mod tests;

pub use finance::{profit, roi_percentage, sale_total, total_capital};
pub use production::{feed_conversion_ratio, survival_rate};
pub use yearly::{classify_expense, ExpenseCategory, YearlyTotals};

/// Rounds a monetary or percentage figure to 2 decimal places.
///
/// This is the single rounding policy of the system: banker's rounding
/// (midpoint-to-even), applied at each derivation point. Plain sums and
/// differences of already-rounded figures are kept exact.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}
