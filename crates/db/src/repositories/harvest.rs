//! Harvest repository.
//!
//! Harvests deplete their stock (guarded like mortality) and are in turn
//! depleted by sales. Deleting a harvest cascades to its sales.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use aqualedger_core::depletion::check_non_negative;
use aqualedger_shared::AppError;

use crate::entities::{harvests, production_cycles};

use super::{lifecycle, lifecycle::LifecycleError};

/// Error types for harvest operations.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// Harvest not found.
    #[error("Harvest not found: {0}")]
    NotFound(Uuid),

    /// Production cycle not found.
    #[error("Production cycle not found: {0}")]
    CycleNotFound(Uuid),

    /// Lifecycle bound violation or missing stock.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<HarvestError> for AppError {
    fn from(err: HarvestError) -> Self {
        match err {
            HarvestError::NotFound(id) => Self::NotFound(format!("harvest {id}")),
            HarvestError::CycleNotFound(id) => Self::NotFound(format!("production cycle {id}")),
            HarvestError::Lifecycle(e) => e.into(),
            HarvestError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a harvest.
#[derive(Debug, Clone)]
pub struct CreateHarvestInput {
    /// Stock the harvest depletes. `None` for legacy rows, which skip the
    /// bound check.
    pub stock_id: Option<Uuid>,
    /// Optional cycle tag.
    pub cycle_id: Option<Uuid>,
    /// Harvested mass in kilograms.
    pub quantity_kg: i32,
    /// Date of the harvest.
    pub harvest_date: NaiveDate,
}

/// Input for updating a harvest.
#[derive(Debug, Clone, Default)]
pub struct UpdateHarvestInput {
    /// New stock reference (outer `None` keeps, inner `None` clears).
    pub stock_id: Option<Option<Uuid>>,
    /// New cycle tag.
    pub cycle_id: Option<Option<Uuid>>,
    /// New harvested mass.
    pub quantity_kg: Option<i32>,
    /// New date.
    pub harvest_date: Option<NaiveDate>,
}

/// Harvest repository.
#[derive(Debug, Clone)]
pub struct HarvestRepository {
    db: DatabaseConnection,
}

impl HarvestRepository {
    /// Creates a new harvest repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a harvest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The referenced stock or cycle does not exist
    /// - The quantity exceeds the stock's remaining quantity
    /// - The database operation fails
    pub async fn create(&self, input: CreateHarvestInput) -> Result<harvests::Model, HarvestError> {
        let txn = self.db.begin().await?;

        if let Some(cycle_id) = input.cycle_id {
            self.ensure_cycle_exists(&txn, cycle_id).await?;
        }

        match input.stock_id {
            Some(stock_id) => {
                lifecycle::guard_harvest(&txn, stock_id, i64::from(input.quantity_kg), None)
                    .await?;
            }
            None => {
                check_non_negative("quantity_kg", i64::from(input.quantity_kg))
                    .map_err(LifecycleError::from)?;
            }
        }

        let now = Utc::now().into();

        let harvest = harvests::ActiveModel {
            id: Set(Uuid::new_v4()),
            stock_id: Set(input.stock_id),
            cycle_id: Set(input.cycle_id),
            quantity_kg: Set(input.quantity_kg),
            harvest_date: Set(input.harvest_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = harvest.insert(&txn).await?;
        txn.commit().await?;
        Ok(result)
    }

    /// Gets a harvest by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the harvest is not found or the query fails.
    pub async fn get(&self, harvest_id: Uuid) -> Result<harvests::Model, HarvestError> {
        harvests::Entity::find_by_id(harvest_id)
            .one(&self.db)
            .await?
            .ok_or(HarvestError::NotFound(harvest_id))
    }

    /// Lists harvests for a stock, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_stock(
        &self,
        stock_id: Uuid,
    ) -> Result<Vec<harvests::Model>, HarvestError> {
        let harvests = harvests::Entity::find()
            .filter(harvests::Column::StockId.eq(stock_id))
            .order_by_desc(harvests::Column::HarvestDate)
            .all(&self.db)
            .await?;
        Ok(harvests)
    }

    /// Updates a harvest.
    ///
    /// The stock bound is re-checked against the (possibly new) stock over
    /// sibling harvests only. Shrinking the harvested quantity below what
    /// its sales have already consumed is refused.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The harvest, stock, or cycle is not found
    /// - The new quantity breaks either depletion bound
    /// - The database operation fails
    pub async fn update(
        &self,
        harvest_id: Uuid,
        input: UpdateHarvestInput,
    ) -> Result<harvests::Model, HarvestError> {
        let harvest = self.get(harvest_id).await?;

        let txn = self.db.begin().await?;

        let target_stock = input.stock_id.unwrap_or(harvest.stock_id);
        let target_cycle = input.cycle_id.unwrap_or(harvest.cycle_id);
        let target_quantity = input.quantity_kg.unwrap_or(harvest.quantity_kg);

        if let Some(cycle_id) = target_cycle {
            self.ensure_cycle_exists(&txn, cycle_id).await?;
        }

        match target_stock {
            Some(stock_id) => {
                lifecycle::guard_harvest(
                    &txn,
                    stock_id,
                    i64::from(target_quantity),
                    Some(harvest_id),
                )
                .await?;
            }
            None => {
                check_non_negative("quantity_kg", i64::from(target_quantity))
                    .map_err(LifecycleError::from)?;
            }
        }

        // The harvest's own sales cap its quantity from below.
        let sold = lifecycle::sales_total_excluding(&txn, harvest_id, None)
            .await
            .map_err(LifecycleError::from)?;
        aqualedger_core::depletion::check_quantity_floor(
            "quantity_kg",
            i64::from(target_quantity),
            sold,
        )
        .map_err(LifecycleError::from)?;

        let mut active: harvests::ActiveModel = harvest.into();

        active.stock_id = Set(target_stock);
        active.cycle_id = Set(target_cycle);
        active.quantity_kg = Set(target_quantity);
        if let Some(date) = input.harvest_date {
            active.harvest_date = Set(date);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a harvest. Cascades to its sales.
    ///
    /// # Errors
    ///
    /// Returns an error if the harvest is not found or the operation fails.
    pub async fn delete(&self, harvest_id: Uuid) -> Result<(), HarvestError> {
        let result = harvests::Entity::delete_by_id(harvest_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(HarvestError::NotFound(harvest_id));
        }

        Ok(())
    }

    /// Verifies the cycle tag points at an existing cycle.
    async fn ensure_cycle_exists(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        cycle_id: Uuid,
    ) -> Result<(), HarvestError> {
        production_cycles::Entity::find_by_id(cycle_id)
            .one(txn)
            .await?
            .ok_or(HarvestError::CycleNotFound(cycle_id))?;
        Ok(())
    }
}
