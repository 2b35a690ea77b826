//! `SeaORM` Entity for the harvests table.
//!
//! A harvest depletes its stock and is itself depleted by fish sales,
//! which it owns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "harvests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub stock_id: Option<Uuid>,
    pub cycle_id: Option<Uuid>,
    pub quantity_kg: i32,
    pub harvest_date: Date,
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
    #[sea_orm(has_many = "super::fish_sales::Entity")]
    FishSales,
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

impl Related<super::fish_sales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishSales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
