//! `SeaORM` Entity for the mortality_records table.
//!
//! `stock_id` is nullable: legacy rows predate stock tracking and are
//! exempt from the depletion bound. Rows with a stock are owned by it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "mortality_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub stock_id: Option<Uuid>,
    pub cycle_id: Option<Uuid>,
    pub quantity_dead: i32,
    pub date: Date,
    pub reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stocks::Entity",
        from = "Column::StockId",
        to = "super::stocks::Column::Id"
    )]
    Stocks,
    #[sea_orm(
        belongs_to = "super::production_cycles::Entity",
        from = "Column::CycleId",
        to = "super::production_cycles::Column::Id"
    )]
    ProductionCycles,
}

impl Related<super::stocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stocks.def()
    }
}

impl Related<super::production_cycles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionCycles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
