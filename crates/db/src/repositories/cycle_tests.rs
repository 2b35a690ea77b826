//! Tests for cycle summary assembly.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::{production_cycles, sea_orm_active_enums::CycleStatus};

use super::build_cycle_summary;

fn cycle(initial_quantity: i32) -> production_cycles::Model {
    production_cycles::Model {
        id: Uuid::new_v4(),
        pond_id: Uuid::new_v4(),
        species_id: Uuid::new_v4(),
        stocking_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        initial_quantity,
        initial_avg_weight_g: dec!(25.0),
        expected_harvest_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        status: CycleStatus::Running,
        notes: None,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

#[test]
fn summary_composes_production_and_financials() {
    let summary = build_cycle_summary(
        cycle(1000),
        50,
        400,
        dec!(1000),
        dec!(5000.00),
        dec!(1200.00),
    );

    assert_eq!(summary.survival_rate, dec!(95.00));
    assert_eq!(summary.fcr, dec!(2.50));
    assert_eq!(summary.net_profit, dec!(3800.00));
    assert_eq!(summary.total_harvested, 400);
    assert_eq!(summary.total_mortality, 50);
}

#[test]
fn summary_zero_initial_quantity_has_zero_survival() {
    let summary = build_cycle_summary(
        cycle(0),
        0,
        0,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    );

    assert_eq!(summary.survival_rate, Decimal::ZERO);
    assert_eq!(summary.fcr, Decimal::ZERO);
    assert_eq!(summary.net_profit, Decimal::ZERO);
}

#[test]
fn summary_no_harvest_has_zero_fcr() {
    // Feed was spent but nothing harvested yet: FCR stays defined as zero.
    let summary = build_cycle_summary(
        cycle(500),
        10,
        0,
        dec!(250),
        Decimal::ZERO,
        dec!(100.00),
    );

    assert_eq!(summary.fcr, Decimal::ZERO);
    assert_eq!(summary.survival_rate, dec!(98.00));
    assert_eq!(summary.net_profit, dec!(-100.00));
}
