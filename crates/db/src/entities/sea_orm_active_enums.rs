//! Database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a production cycle.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "cycle_status")]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// The cycle is ongoing; events may still attach to it.
    #[sea_orm(string_value = "running")]
    Running,
    /// The cycle is finished.
    #[sea_orm(string_value = "completed")]
    Completed,
}
