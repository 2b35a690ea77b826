//! `SeaORM` Entity for the fish_sales table.
//!
//! `total_amount` is derived (`quantity_kg × price_per_kg`, 2 dp) and
//! stored for display; the reporting queries recompute it from source.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fish_sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub harvest_id: Uuid,
    pub buyer_name: String,
    pub quantity_kg: i32,
    pub price_per_kg: Decimal,
    pub total_amount: Decimal,
    pub sale_date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::harvests::Entity",
        from = "Column::HarvestId",
        to = "super::harvests::Column::Id"
    )]
    Harvests,
}

impl Related<super::harvests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Harvests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
