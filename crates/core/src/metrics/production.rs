//! Per-cycle production metrics.

use rust_decimal::Decimal;

use super::round2;

/// Percentage of initially stocked fish not recorded as dead, 2 dp.
///
/// Defined as 0 when `initial_quantity` is zero.
#[must_use]
pub fn survival_rate(initial_quantity: i64, total_mortality: i64) -> Decimal {
    if initial_quantity <= 0 {
        return Decimal::ZERO;
    }
    let survivors = initial_quantity - total_mortality;
    round2(Decimal::from(survivors) / Decimal::from(initial_quantity) * Decimal::ONE_HUNDRED)
}

/// Feed conversion ratio: total feed mass over total harvested mass, 2 dp.
///
/// Lower is more efficient. Defined as 0 when nothing was harvested.
#[must_use]
pub fn feed_conversion_ratio(total_feed_kg: Decimal, total_harvest_kg: i64) -> Decimal {
    if total_harvest_kg <= 0 {
        return Decimal::ZERO;
    }
    round2(total_feed_kg / Decimal::from(total_harvest_kg))
}
