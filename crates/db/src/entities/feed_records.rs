//! `SeaORM` Entity for the feed_records table.
//!
//! Feed is attributed to a pond, not to a stock batch; concurrent stocks
//! in one pond share the pond's feed cost.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "feed_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pond_id: Uuid,
    pub cycle_id: Option<Uuid>,
    pub feed_type: String,
    pub quantity_kg: Decimal,
    pub cost: Decimal,
    pub date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ponds::Entity",
        from = "Column::PondId",
        to = "super::ponds::Column::Id"
    )]
    Ponds,
    #[sea_orm(
        belongs_to = "super::production_cycles::Entity",
        from = "Column::CycleId",
        to = "super::production_cycles::Column::Id"
    )]
    ProductionCycles,
}

impl Related<super::ponds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ponds.def()
    }
}

impl Related<super::production_cycles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionCycles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
