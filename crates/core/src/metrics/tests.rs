//! Tests for production and financial metrics.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    classify_expense, feed_conversion_ratio, profit, roi_percentage, round2, sale_total,
    survival_rate, total_capital, ExpenseCategory, YearlyTotals,
};

// ============================================================================
// Rounding policy
// ============================================================================

#[rstest]
#[case(dec!(2.345), dec!(2.34))] // midpoint rounds to even
#[case(dec!(2.355), dec!(2.36))]
#[case(dec!(2.005), dec!(2.00))]
#[case(dec!(2.344), dec!(2.34))]
#[case(dec!(2.346), dec!(2.35))]
#[case(dec!(-2.345), dec!(-2.34))]
fn round2_is_bankers_rounding(#[case] input: Decimal, #[case] expected: Decimal) {
    assert_eq!(round2(input), expected);
}

#[test]
fn sale_total_rounds_at_derivation() {
    // 3 × 1.115 = 3.345, a midpoint; banker's rounding lands on the even digit.
    assert_eq!(sale_total(3, dec!(1.115)), dec!(3.34));
    assert_eq!(sale_total(10, dec!(250.50)), dec!(2505.00));
    assert_eq!(sale_total(0, dec!(99.99)), Decimal::ZERO);
}

// ============================================================================
// Survival rate
// ============================================================================

#[test]
fn survival_rate_zero_initial_is_zero() {
    assert_eq!(survival_rate(0, 0), Decimal::ZERO);
    assert_eq!(survival_rate(0, 10), Decimal::ZERO);
}

#[test]
fn survival_rate_examples() {
    assert_eq!(survival_rate(1000, 50), dec!(95.00));
    assert_eq!(survival_rate(1000, 0), dec!(100.00));
    assert_eq!(survival_rate(1000, 1000), Decimal::ZERO);
    // 1/3 dead: 66.666...% survives, rounded to 2 dp.
    assert_eq!(survival_rate(3, 1), dec!(66.67));
}

// ============================================================================
// Feed conversion ratio
// ============================================================================

#[test]
fn fcr_zero_harvest_is_zero() {
    assert_eq!(feed_conversion_ratio(dec!(500), 0), Decimal::ZERO);
}

#[rstest]
#[case(dec!(100), 40, dec!(2.50))]
#[case(dec!(10), 3, dec!(3.33))]
#[case(dec!(0), 40, dec!(0))]
fn fcr_examples(#[case] feed: Decimal, #[case] harvest: i64, #[case] expected: Decimal) {
    assert_eq!(feed_conversion_ratio(feed, harvest), expected);
}

// ============================================================================
// Capital, profit, ROI
// ============================================================================

#[test]
fn capital_and_profit_are_exact() {
    let capital = total_capital(dec!(1200.50), dec!(799.50));
    assert_eq!(capital, dec!(2000.00));
    assert_eq!(profit(dec!(2500.00), capital), dec!(500.00));
    assert_eq!(profit(dec!(1500.00), capital), dec!(-500.00));
}

#[test]
fn roi_zero_investment_is_zero() {
    assert_eq!(roi_percentage(dec!(250), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn roi_examples() {
    assert_eq!(roi_percentage(dec!(250), dec!(1000)), dec!(25.00));
    assert_eq!(roi_percentage(dec!(-100), dec!(1000)), dec!(-10.00));
    // 100/3 = 33.333...% rounded.
    assert_eq!(roi_percentage(dec!(1), dec!(3)), dec!(33.33));
}

// ============================================================================
// Expense classification
// ============================================================================

#[rstest]
#[case("Medicine for tilapia", ExpenseCategory::Medicine)]
#[case("ANTIFUNGAL MEDICINE", ExpenseCategory::Medicine)]
#[case("medicine restock", ExpenseCategory::Medicine)]
#[case("Electricity", ExpenseCategory::Other)]
#[case("Pond net repair", ExpenseCategory::Other)]
#[case("", ExpenseCategory::Other)]
fn expense_classification(#[case] description: &str, #[case] expected: ExpenseCategory) {
    assert_eq!(classify_expense(description), expected);
}

// ============================================================================
// Yearly rollup
// ============================================================================

fn sample_year() -> YearlyTotals {
    YearlyTotals {
        year: 2025,
        total_fish_purchase: dec!(400),
        total_feed_purchase: dec!(350),
        total_medicine_purchase: dec!(150),
        total_other_expenses: dec!(100),
        total_sales_revenue: dec!(1250),
    }
}

#[test]
fn yearly_totals_compose() {
    let totals = sample_year();
    assert_eq!(totals.total_investment(), dec!(1000));
    assert_eq!(totals.net_profit(), dec!(250));
    assert_eq!(totals.roi_percentage(), dec!(25.00));
}

#[test]
fn yearly_totals_empty_year_is_all_zero() {
    let totals = YearlyTotals {
        year: 2025,
        total_fish_purchase: Decimal::ZERO,
        total_feed_purchase: Decimal::ZERO,
        total_medicine_purchase: Decimal::ZERO,
        total_other_expenses: Decimal::ZERO,
        total_sales_revenue: Decimal::ZERO,
    };
    assert_eq!(totals.total_investment(), Decimal::ZERO);
    assert_eq!(totals.net_profit(), Decimal::ZERO);
    assert_eq!(totals.roi_percentage(), Decimal::ZERO);
}
