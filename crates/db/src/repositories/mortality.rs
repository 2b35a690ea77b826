//! Mortality record repository.
//!
//! Every create and update runs the stock lifecycle guard inside the same
//! transaction as the write: the parent stock is row-locked, sibling
//! records are summed (excluding the record under update), and the bound
//! is checked before anything is written.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use aqualedger_core::depletion::check_non_negative;
use aqualedger_shared::AppError;

use crate::entities::{mortality_records, production_cycles};

use super::{lifecycle, lifecycle::LifecycleError};

/// Error types for mortality operations.
#[derive(Debug, thiserror::Error)]
pub enum MortalityError {
    /// Mortality record not found.
    #[error("Mortality record not found: {0}")]
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

impl From<MortalityError> for AppError {
    fn from(err: MortalityError) -> Self {
        match err {
            MortalityError::NotFound(id) => Self::NotFound(format!("mortality record {id}")),
            MortalityError::CycleNotFound(id) => Self::NotFound(format!("production cycle {id}")),
            MortalityError::Lifecycle(e) => e.into(),
            MortalityError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a mortality record.
#[derive(Debug, Clone)]
pub struct CreateMortalityInput {
    /// Stock the deaths deplete. `None` for legacy rows, which skip the
    /// bound check.
    pub stock_id: Option<Uuid>,
    /// Optional cycle tag.
    pub cycle_id: Option<Uuid>,
    /// Number of dead fish.
    pub quantity_dead: i32,
    /// Date of the event.
    pub date: NaiveDate,
    /// Optional cause.
    pub reason: Option<String>,
}

/// Input for updating a mortality record.
#[derive(Debug, Clone, Default)]
pub struct UpdateMortalityInput {
    /// New stock reference (outer `None` keeps, inner `None` clears).
    pub stock_id: Option<Option<Uuid>>,
    /// New cycle tag.
    pub cycle_id: Option<Option<Uuid>>,
    /// New quantity.
    pub quantity_dead: Option<i32>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New cause.
    pub reason: Option<Option<String>>,
}

/// Mortality record repository.
#[derive(Debug, Clone)]
pub struct MortalityRepository {
    db: DatabaseConnection,
}

impl MortalityRepository {
    /// Creates a new mortality repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a mortality event.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The referenced stock or cycle does not exist
    /// - The quantity exceeds the stock's remaining quantity
    /// - The database operation fails
    pub async fn create(
        &self,
        input: CreateMortalityInput,
    ) -> Result<mortality_records::Model, MortalityError> {
        let txn = self.db.begin().await?;

        if let Some(cycle_id) = input.cycle_id {
            self.ensure_cycle_exists(&txn, cycle_id).await?;
        }

        match input.stock_id {
            Some(stock_id) => {
                lifecycle::guard_mortality(&txn, stock_id, i64::from(input.quantity_dead), None)
                    .await?;
            }
            None => {
                check_non_negative("quantity_dead", i64::from(input.quantity_dead))
                    .map_err(LifecycleError::from)?;
            }
        }

        let now = Utc::now().into();

        let record = mortality_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            stock_id: Set(input.stock_id),
            cycle_id: Set(input.cycle_id),
            quantity_dead: Set(input.quantity_dead),
            date: Set(input.date),
            reason: Set(input.reason),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = record.insert(&txn).await?;
        txn.commit().await?;
        Ok(result)
    }

    /// Gets a mortality record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the query fails.
    pub async fn get(&self, record_id: Uuid) -> Result<mortality_records::Model, MortalityError> {
        mortality_records::Entity::find_by_id(record_id)
            .one(&self.db)
            .await?
            .ok_or(MortalityError::NotFound(record_id))
    }

    /// Lists mortality records for a stock, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_stock(
        &self,
        stock_id: Uuid,
    ) -> Result<Vec<mortality_records::Model>, MortalityError> {
        let records = mortality_records::Entity::find()
            .filter(mortality_records::Column::StockId.eq(stock_id))
            .order_by_desc(mortality_records::Column::Date)
            .all(&self.db)
            .await?;
        Ok(records)
    }

    /// Updates a mortality record.
    ///
    /// The bound is re-checked against the record's (possibly new) stock,
    /// summing sibling records only; the record's own prior quantity never
    /// counts against it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record, stock, or cycle is not found
    /// - The new quantity exceeds the stock's remaining quantity
    /// - The database operation fails
    pub async fn update(
        &self,
        record_id: Uuid,
        input: UpdateMortalityInput,
    ) -> Result<mortality_records::Model, MortalityError> {
        let record = self.get(record_id).await?;

        let txn = self.db.begin().await?;

        let target_stock = input.stock_id.unwrap_or(record.stock_id);
        let target_cycle = input.cycle_id.unwrap_or(record.cycle_id);
        let target_quantity = input.quantity_dead.unwrap_or(record.quantity_dead);

        if let Some(cycle_id) = target_cycle {
            self.ensure_cycle_exists(&txn, cycle_id).await?;
        }

        match target_stock {
            Some(stock_id) => {
                lifecycle::guard_mortality(
                    &txn,
                    stock_id,
                    i64::from(target_quantity),
                    Some(record_id),
                )
                .await?;
            }
            None => {
                check_non_negative("quantity_dead", i64::from(target_quantity))
                    .map_err(LifecycleError::from)?;
            }
        }

        let mut active: mortality_records::ActiveModel = record.into();

        active.stock_id = Set(target_stock);
        active.cycle_id = Set(target_cycle);
        active.quantity_dead = Set(target_quantity);
        if let Some(date) = input.date {
            active.date = Set(date);
        }
        if let Some(reason) = input.reason {
            active.reason = Set(reason);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a mortality record. Deletion only frees quantity, so no
    /// bound check is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the operation fails.
    pub async fn delete(&self, record_id: Uuid) -> Result<(), MortalityError> {
        let result = mortality_records::Entity::delete_by_id(record_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(MortalityError::NotFound(record_id));
        }

        Ok(())
    }

    /// Verifies the cycle tag points at an existing cycle.
    async fn ensure_cycle_exists(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        cycle_id: Uuid,
    ) -> Result<(), MortalityError> {
        production_cycles::Entity::find_by_id(cycle_id)
            .one(txn)
            .await?
            .ok_or(MortalityError::CycleNotFound(cycle_id))?;
        Ok(())
    }
}
