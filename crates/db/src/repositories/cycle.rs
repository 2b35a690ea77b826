//! Production cycle repository.
//!
//! A cycle groups one stocking-to-harvest campaign. Feed, mortality, and
//! harvest rows tag a cycle without being owned by it; expenses are owned
//! and cascade-delete with the cycle.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_core::metrics::{feed_conversion_ratio, profit, survival_rate};
use aqualedger_shared::AppError;

use crate::entities::{
    expenses, feed_records, fish_sales, fish_species, harvests, mortality_records, ponds,
    production_cycles, sea_orm_active_enums::CycleStatus,
};

use super::aggregate;

/// Error types for cycle operations.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// Cycle not found.
    #[error("Production cycle not found: {0}")]
    NotFound(Uuid),

    /// Pond not found.
    #[error("Pond not found: {0}")]
    PondNotFound(Uuid),

    /// Species not found.
    #[error("Species not found: {0}")]
    SpeciesNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CycleError> for AppError {
    fn from(err: CycleError) -> Self {
        match err {
            CycleError::NotFound(id) => Self::NotFound(format!("production cycle {id}")),
            CycleError::PondNotFound(id) => Self::NotFound(format!("pond {id}")),
            CycleError::SpeciesNotFound(id) => Self::NotFound(format!("species {id}")),
            CycleError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a production cycle.
#[derive(Debug, Clone)]
pub struct CreateCycleInput {
    /// Pond the cycle runs in.
    pub pond_id: Uuid,
    /// Species being grown.
    pub species_id: Uuid,
    /// Date of stocking.
    pub stocking_date: NaiveDate,
    /// Number of fish at stocking.
    pub initial_quantity: i32,
    /// Average fish weight at stocking, in grams.
    pub initial_avg_weight_g: Decimal,
    /// Planned harvest date.
    pub expected_harvest_date: NaiveDate,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Input for updating a production cycle.
#[derive(Debug, Clone, Default)]
pub struct UpdateCycleInput {
    /// New expected harvest date.
    pub expected_harvest_date: Option<NaiveDate>,
    /// New status.
    pub status: Option<CycleStatus>,
    /// New notes.
    pub notes: Option<Option<String>>,
}

/// Per-cycle rollup of production and financial figures.
#[derive(Debug, Clone)]
pub struct CycleSummary {
    /// Cycle record.
    pub cycle: production_cycles::Model,
    /// Σ sale totals over sales of the cycle's harvests.
    pub total_sales: Decimal,
    /// Σ expense amounts.
    pub total_expense: Decimal,
    /// Sales minus expenses.
    pub net_profit: Decimal,
    /// Σ quantity_kg over the cycle's harvests.
    pub total_harvested: i64,
    /// Σ quantity_dead over the cycle's mortality records.
    pub total_mortality: i64,
    /// Percent of initially stocked fish not recorded dead, 2 dp.
    pub survival_rate: Decimal,
    /// Σ feed quantity over the cycle's feed records, in kg.
    pub total_feed_kg: Decimal,
    /// Feed conversion ratio, 2 dp.
    pub fcr: Decimal,
}

/// Production cycle repository for CRUD operations and rollups.
#[derive(Debug, Clone)]
pub struct CycleRepository {
    db: DatabaseConnection,
}

impl CycleRepository {
    /// Creates a new cycle repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new production cycle with status `Running`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pond or species does not exist, or the
    /// database operation fails.
    pub async fn create(
        &self,
        input: CreateCycleInput,
    ) -> Result<production_cycles::Model, CycleError> {
        let _pond = ponds::Entity::find_by_id(input.pond_id)
            .one(&self.db)
            .await?
            .ok_or(CycleError::PondNotFound(input.pond_id))?;

        let _species = fish_species::Entity::find_by_id(input.species_id)
            .one(&self.db)
            .await?
            .ok_or(CycleError::SpeciesNotFound(input.species_id))?;

        let now = Utc::now().into();

        let cycle = production_cycles::ActiveModel {
            id: Set(Uuid::new_v4()),
            pond_id: Set(input.pond_id),
            species_id: Set(input.species_id),
            stocking_date: Set(input.stocking_date),
            initial_quantity: Set(input.initial_quantity),
            initial_avg_weight_g: Set(input.initial_avg_weight_g),
            expected_harvest_date: Set(input.expected_harvest_date),
            status: Set(CycleStatus::Running),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = cycle.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets a cycle by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle is not found or the query fails.
    pub async fn get(&self, cycle_id: Uuid) -> Result<production_cycles::Model, CycleError> {
        production_cycles::Entity::find_by_id(cycle_id)
            .one(&self.db)
            .await?
            .ok_or(CycleError::NotFound(cycle_id))
    }

    /// Lists all cycles, newest stocking first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<production_cycles::Model>, CycleError> {
        let cycles = production_cycles::Entity::find()
            .order_by_desc(production_cycles::Column::StockingDate)
            .all(&self.db)
            .await?;
        Ok(cycles)
    }

    /// Updates a cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle is not found or the operation fails.
    pub async fn update(
        &self,
        cycle_id: Uuid,
        input: UpdateCycleInput,
    ) -> Result<production_cycles::Model, CycleError> {
        let cycle = self.get(cycle_id).await?;

        let mut active: production_cycles::ActiveModel = cycle.into();

        if let Some(expected) = input.expected_harvest_date {
            active.expected_harvest_date = Set(expected);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(notes) = input.notes {
            active.notes = Set(notes);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Marks a cycle as completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle is not found or the operation fails.
    pub async fn complete(&self, cycle_id: Uuid) -> Result<production_cycles::Model, CycleError> {
        let cycle = self.get(cycle_id).await?;

        let mut active: production_cycles::ActiveModel = cycle.into();
        active.status = Set(CycleStatus::Completed);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a cycle. Its expenses go with it; tagged feed, mortality,
    /// and harvest rows survive with the tag cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle is not found or the operation fails.
    pub async fn delete(&self, cycle_id: Uuid) -> Result<(), CycleError> {
        let result = production_cycles::Entity::delete_by_id(cycle_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CycleError::NotFound(cycle_id));
        }

        Ok(())
    }

    /// Computes the per-cycle rollup from current ledger state.
    ///
    /// Plain consistent reads; no locks. Only rows tagged with this cycle
    /// contribute; untagged legacy rows count zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle is not found or a query fails.
    pub async fn summary(&self, cycle_id: Uuid) -> Result<CycleSummary, CycleError> {
        let cycle = self.get(cycle_id).await?;

        let mortality_rows = mortality_records::Entity::find()
            .filter(mortality_records::Column::CycleId.eq(cycle_id))
            .all(&self.db)
            .await?;

        let harvest_rows = harvests::Entity::find()
            .filter(harvests::Column::CycleId.eq(cycle_id))
            .all(&self.db)
            .await?;

        let harvest_ids: Vec<Uuid> = harvest_rows.iter().map(|h| h.id).collect();
        let sale_rows = if harvest_ids.is_empty() {
            vec![]
        } else {
            fish_sales::Entity::find()
                .filter(fish_sales::Column::HarvestId.is_in(harvest_ids))
                .all(&self.db)
                .await?
        };

        let feed_rows = feed_records::Entity::find()
            .filter(feed_records::Column::CycleId.eq(cycle_id))
            .all(&self.db)
            .await?;

        let expense_rows = expenses::Entity::find()
            .filter(expenses::Column::CycleId.eq(cycle_id))
            .all(&self.db)
            .await?;

        Ok(build_cycle_summary(
            cycle,
            aggregate::total_mortality(&mortality_rows),
            aggregate::total_harvest(&harvest_rows),
            aggregate::total_feed_quantity(&feed_rows),
            aggregate::total_sale_revenue(&sale_rows),
            aggregate::total_expense(&expense_rows),
        ))
    }
}

/// Assembles a cycle summary from already-aggregated figures.
#[must_use]
pub fn build_cycle_summary(
    cycle: production_cycles::Model,
    total_mortality: i64,
    total_harvested: i64,
    total_feed_kg: Decimal,
    total_sales: Decimal,
    total_expense: Decimal,
) -> CycleSummary {
    let survival = survival_rate(i64::from(cycle.initial_quantity), total_mortality);
    let fcr = feed_conversion_ratio(total_feed_kg, total_harvested);
    let net = profit(total_sales, total_expense);

    CycleSummary {
        cycle,
        total_sales,
        total_expense,
        net_profit: net,
        total_harvested,
        total_mortality,
        survival_rate: survival,
        total_feed_kg,
        fcr,
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
