//! `SeaORM` Entity for the ponds table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ponds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub size_acres: Decimal,
    pub water_source: String,
    pub location: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stocks::Entity")]
    Stocks,
    #[sea_orm(has_many = "super::feed_records::Entity")]
    FeedRecords,
    #[sea_orm(has_many = "super::production_cycles::Entity")]
    ProductionCycles,
}

impl Related<super::stocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stocks.def()
    }
}

impl Related<super::feed_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedRecords.def()
    }
}

impl Related<super::production_cycles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionCycles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
