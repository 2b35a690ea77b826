//! `SeaORM` Entity for the expenses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cycle_id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub expense_date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::production_cycles::Entity",
        from = "Column::CycleId",
        to = "super::production_cycles::Column::Id"
    )]
    ProductionCycles,
}

impl Related<super::production_cycles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionCycles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
