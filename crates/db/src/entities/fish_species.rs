//! `SeaORM` Entity for the fish_species table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fish_species")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub average_growth_days: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stocks::Entity")]
    Stocks,
    #[sea_orm(has_many = "super::production_cycles::Entity")]
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
