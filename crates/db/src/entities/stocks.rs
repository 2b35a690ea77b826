//! `SeaORM` Entity for the stocks table.
//!
//! A stock is one batch of fish introduced into a pond on a date. Its
//! quantity is depleted by mortality and harvest events, which it owns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pond_id: Uuid,
    pub species_id: Uuid,
    pub quantity: i32,
    pub stocking_date: Date,
    pub cost: Decimal,
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
        belongs_to = "super::fish_species::Entity",
        from = "Column::SpeciesId",
        to = "super::fish_species::Column::Id"
    )]
    FishSpecies,
    #[sea_orm(has_many = "super::mortality_records::Entity")]
    MortalityRecords,
    #[sea_orm(has_many = "super::harvests::Entity")]
    Harvests,
}

impl Related<super::ponds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ponds.def()
    }
}

impl Related<super::fish_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishSpecies.def()
    }
}

impl Related<super::mortality_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MortalityRecords.def()
    }
}

impl Related<super::harvests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Harvests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
