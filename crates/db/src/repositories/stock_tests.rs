//! Tests for stock summary assembly.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::stocks;

use super::build_stock_summary;

fn stock(quantity: i32, cost: Decimal) -> stocks::Model {
    stocks::Model {
        id: Uuid::new_v4(),
        pond_id: Uuid::new_v4(),
        species_id: Uuid::new_v4(),
        quantity,
        stocking_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        cost,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

#[test]
fn summary_composes_depletion_and_financials() {
    let summary = build_stock_summary(
        stock(1000, dec!(400.00)),
        50,
        120,
        dec!(350.00),
        dec!(1250.00),
    );

    assert_eq!(summary.total_mortality, 50);
    assert_eq!(summary.total_harvest, 120);
    assert_eq!(summary.remaining_quantity, 830);
    assert_eq!(summary.total_capital, dec!(750.00));
    assert_eq!(summary.profit, dec!(500.00));
}

#[test]
fn summary_of_untouched_stock() {
    let summary = build_stock_summary(
        stock(500, dec!(200.00)),
        0,
        0,
        Decimal::ZERO,
        Decimal::ZERO,
    );

    assert_eq!(summary.remaining_quantity, 500);
    assert_eq!(summary.total_capital, dec!(200.00));
    // Nothing sold yet: the whole capital is still at risk.
    assert_eq!(summary.profit, dec!(-200.00));
}

#[test]
fn summary_fully_depleted_stock() {
    let summary = build_stock_summary(
        stock(100, dec!(100.00)),
        60,
        40,
        dec!(50.00),
        dec!(480.00),
    );

    assert_eq!(summary.remaining_quantity, 0);
    assert_eq!(summary.profit, dec!(330.00));
}
