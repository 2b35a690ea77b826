//! Stock-level financial metrics.

use rust_decimal::Decimal;

use super::round2;

/// Sale line total: `quantity_kg × price_per_kg`, 2 dp.
#[must_use]
pub fn sale_total(quantity_kg: i64, price_per_kg: Decimal) -> Decimal {
    round2(Decimal::from(quantity_kg) * price_per_kg)
}

/// Capital tied up in a stock: stocking cost plus attributed feed cost.
#[must_use]
pub fn total_capital(stock_cost: Decimal, feed_cost: Decimal) -> Decimal {
    stock_cost + feed_cost
}

/// Profit: revenue minus capital. Exact decimal subtraction, never rounded.
#[must_use]
pub fn profit(revenue: Decimal, capital: Decimal) -> Decimal {
    revenue - capital
}

/// Return on investment as a percentage, 2 dp.
///
/// Defined as 0 when `total_investment` is zero.
#[must_use]
pub fn roi_percentage(net_profit: Decimal, total_investment: Decimal) -> Decimal {
    if total_investment.is_zero() {
        return Decimal::ZERO;
    }
    round2(net_profit / total_investment * Decimal::ONE_HUNDRED)
}
