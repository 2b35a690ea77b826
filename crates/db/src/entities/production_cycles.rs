//! `SeaORM` Entity for the production_cycles table.
//!
//! A production cycle groups one stocking-to-harvest campaign. Feed,
//! mortality, and harvest rows may tag a cycle without being owned by it;
//! expenses are owned outright.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::CycleStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "production_cycles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pond_id: Uuid,
    pub species_id: Uuid,
    pub stocking_date: Date,
    pub initial_quantity: i32,
    pub initial_avg_weight_g: Decimal,
    pub expected_harvest_date: Date,
    pub status: CycleStatus,
    pub notes: Option<String>,
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
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
    #[sea_orm(has_many = "super::feed_records::Entity")]
    FeedRecords,
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

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::feed_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedRecords.def()
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
