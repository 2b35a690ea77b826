//! Tests for the zero-default aggregate functions.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::{expenses, feed_records, fish_sales, harvests, mortality_records};

use super::{
    split_expenses, total_expense, total_feed_cost, total_feed_quantity, total_harvest,
    total_mortality, total_sale_revenue, total_sold,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn mortality(quantity_dead: i32) -> mortality_records::Model {
    mortality_records::Model {
        id: Uuid::new_v4(),
        stock_id: Some(Uuid::new_v4()),
        cycle_id: None,
        quantity_dead,
        date: day(1),
        reason: None,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn harvest(quantity_kg: i32) -> harvests::Model {
    harvests::Model {
        id: Uuid::new_v4(),
        stock_id: Some(Uuid::new_v4()),
        cycle_id: None,
        quantity_kg,
        harvest_date: day(2),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn sale(quantity_kg: i32, price_per_kg: Decimal) -> fish_sales::Model {
    fish_sales::Model {
        id: Uuid::new_v4(),
        harvest_id: Uuid::new_v4(),
        buyer_name: "Market Co".to_string(),
        quantity_kg,
        price_per_kg,
        total_amount: (Decimal::from(quantity_kg) * price_per_kg).round_dp(2),
        sale_date: day(3),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn feed(quantity_kg: Decimal, cost: Decimal) -> feed_records::Model {
    feed_records::Model {
        id: Uuid::new_v4(),
        pond_id: Uuid::new_v4(),
        cycle_id: None,
        feed_type: "pellets".to_string(),
        quantity_kg,
        cost,
        date: day(4),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn expense(description: &str, amount: Decimal) -> expenses::Model {
    expenses::Model {
        id: Uuid::new_v4(),
        cycle_id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        expense_date: day(5),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

#[test]
fn empty_slices_sum_to_zero() {
    assert_eq!(total_mortality(&[]), 0);
    assert_eq!(total_harvest(&[]), 0);
    assert_eq!(total_sold(&[]), 0);
    assert_eq!(total_sale_revenue(&[]), Decimal::ZERO);
    assert_eq!(total_feed_cost(&[]), Decimal::ZERO);
    assert_eq!(total_feed_quantity(&[]), Decimal::ZERO);
    assert_eq!(total_expense(&[]), Decimal::ZERO);
    assert_eq!(split_expenses(&[]), (Decimal::ZERO, Decimal::ZERO));
}

#[test]
fn quantity_sums() {
    assert_eq!(total_mortality(&[mortality(60), mortality(40)]), 100);
    assert_eq!(total_harvest(&[harvest(20), harvest(15)]), 35);
    assert_eq!(total_sold(&[sale(5, dec!(10)), sale(10, dec!(12))]), 15);
}

#[test]
fn sale_revenue_recomputes_per_line() {
    let rows = vec![sale(3, dec!(1.115)), sale(10, dec!(250.50))];
    // Each line is rounded at derivation: 3.34 + 2505.00.
    assert_eq!(total_sale_revenue(&rows), dec!(2508.34));
}

#[test]
fn feed_sums() {
    let rows = vec![feed(dec!(25.5), dec!(120.00)), feed(dec!(10), dec!(47.25))];
    assert_eq!(total_feed_cost(&rows), dec!(167.25));
    assert_eq!(total_feed_quantity(&rows), dec!(35.5));
}

#[test]
fn expense_split_by_description() {
    let rows = vec![
        expense("Medicine for tilapia", dec!(150)),
        expense("Electricity", dec!(80)),
        expense("antifungal MEDICINE", dec!(50)),
        expense("Labor", dec!(20)),
    ];
    assert_eq!(total_expense(&rows), dec!(300));
    assert_eq!(split_expenses(&rows), (dec!(200), dec!(100)));
}
