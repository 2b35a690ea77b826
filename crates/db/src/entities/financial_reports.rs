//! `SeaORM` Entity for the financial_reports table.
//!
//! One row per calendar year; a memoized snapshot of the yearly rollup,
//! never a source of truth. The `year` column carries a unique index so
//! concurrent recomputations upsert the same row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub year: i32,
    pub total_fish_purchase: Decimal,
    pub total_feed_purchase: Decimal,
    pub total_medicine_purchase: Decimal,
    pub total_other_expenses: Decimal,
    pub total_investment: Decimal,
    pub total_sales_revenue: Decimal,
    pub roi_percentage: Decimal,
    pub net_profit: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
