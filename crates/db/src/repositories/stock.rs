//! Stock repository for stocking batch database operations.
//!
//! Besides CRUD, this exposes the per-stock rollup: depletion totals,
//! remaining quantity, attributed feed cost, sale revenue, capital, and
//! profit.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use aqualedger_core::depletion::{check_non_negative, remaining_quantity};
use aqualedger_core::metrics::{profit, total_capital};
use aqualedger_shared::AppError;

use crate::entities::{feed_records, fish_sales, fish_species, harvests, ponds, stocks};

use super::{aggregate, lifecycle, lifecycle::LifecycleError};

/// Error types for stock operations.
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    /// Stock not found.
    #[error("Stock not found: {0}")]
    NotFound(Uuid),

    /// Pond not found.
    #[error("Pond not found: {0}")]
    PondNotFound(Uuid),

    /// Species not found.
    #[error("Species not found: {0}")]
    SpeciesNotFound(Uuid),

    /// Lifecycle bound violation.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::NotFound(id) => Self::NotFound(format!("stock {id}")),
            StockError::PondNotFound(id) => Self::NotFound(format!("pond {id}")),
            StockError::SpeciesNotFound(id) => Self::NotFound(format!("species {id}")),
            StockError::Lifecycle(e) => e.into(),
            StockError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a stock.
#[derive(Debug, Clone)]
pub struct CreateStockInput {
    /// Pond the batch goes into.
    pub pond_id: Uuid,
    /// Species being stocked.
    pub species_id: Uuid,
    /// Number of fish introduced.
    pub quantity: i32,
    /// Date of stocking.
    pub stocking_date: NaiveDate,
    /// Purchase cost of the batch.
    pub cost: Decimal,
}

/// Input for updating a stock.
#[derive(Debug, Clone, Default)]
pub struct UpdateStockInput {
    /// New quantity. Shrinking below already-recorded depletion is refused.
    pub quantity: Option<i32>,
    /// New stocking date.
    pub stocking_date: Option<NaiveDate>,
    /// New cost.
    pub cost: Option<Decimal>,
}

/// Per-stock rollup of depletion and financial figures.
#[derive(Debug, Clone)]
pub struct StockSummary {
    /// Stock record.
    pub stock: stocks::Model,
    /// Σ quantity_dead over its mortality records.
    pub total_mortality: i64,
    /// Σ quantity_kg over its harvests.
    pub total_harvest: i64,
    /// Quantity left after mortality and harvest.
    pub remaining_quantity: i64,
    /// Σ cost of feed records on the same pond.
    pub total_feed_cost: Decimal,
    /// Σ sale totals over sales of this stock's harvests.
    pub total_sale_revenue: Decimal,
    /// Stocking cost plus attributed feed cost.
    pub total_capital: Decimal,
    /// Revenue minus capital.
    pub profit: Decimal,
}

/// Stock repository for CRUD operations and rollups.
#[derive(Debug, Clone)]
pub struct StockRepository {
    db: DatabaseConnection,
}

impl StockRepository {
    /// Creates a new stock repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new stock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pond or species does not exist
    /// - The quantity is negative
    /// - The database operation fails
    pub async fn create(&self, input: CreateStockInput) -> Result<stocks::Model, StockError> {
        let _pond = ponds::Entity::find_by_id(input.pond_id)
            .one(&self.db)
            .await?
            .ok_or(StockError::PondNotFound(input.pond_id))?;

        let _species = fish_species::Entity::find_by_id(input.species_id)
            .one(&self.db)
            .await?
            .ok_or(StockError::SpeciesNotFound(input.species_id))?;

        check_non_negative("quantity", i64::from(input.quantity))
            .map_err(LifecycleError::from)?;

        let now = Utc::now().into();

        let stock = stocks::ActiveModel {
            id: Set(Uuid::new_v4()),
            pond_id: Set(input.pond_id),
            species_id: Set(input.species_id),
            quantity: Set(input.quantity),
            stocking_date: Set(input.stocking_date),
            cost: Set(input.cost),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = stock.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets a stock by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the stock is not found or the query fails.
    pub async fn get(&self, stock_id: Uuid) -> Result<stocks::Model, StockError> {
        stocks::Entity::find_by_id(stock_id)
            .one(&self.db)
            .await?
            .ok_or(StockError::NotFound(stock_id))
    }

    /// Lists all stocks, newest stocking first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<stocks::Model>, StockError> {
        let stocks = stocks::Entity::find()
            .order_by_desc(stocks::Column::StockingDate)
            .all(&self.db)
            .await?;
        Ok(stocks)
    }

    /// Lists stocks in a pond, newest stocking first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_pond(&self, pond_id: Uuid) -> Result<Vec<stocks::Model>, StockError> {
        let stocks = stocks::Entity::find()
            .filter(stocks::Column::PondId.eq(pond_id))
            .order_by_desc(stocks::Column::StockingDate)
            .all(&self.db)
            .await?;
        Ok(stocks)
    }

    /// Updates a stock.
    ///
    /// Lowering the quantity below what mortality and harvest records have
    /// already consumed is refused; the check runs with the stock row
    /// locked so concurrent depleting writes cannot slip past it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stock is not found
    /// - The new quantity falls below recorded depletion
    /// - The database operation fails
    pub async fn update(
        &self,
        stock_id: Uuid,
        input: UpdateStockInput,
    ) -> Result<stocks::Model, StockError> {
        let stock = self.get(stock_id).await?;

        let txn = self.db.begin().await?;

        if let Some(quantity) = input.quantity {
            lifecycle::guard_stock_quantity(&txn, stock_id, i64::from(quantity)).await?;
        }

        let mut active: stocks::ActiveModel = stock.into();

        if let Some(quantity) = input.quantity {
            active.quantity = Set(quantity);
        }
        if let Some(stocking_date) = input.stocking_date {
            active.stocking_date = Set(stocking_date);
        }
        if let Some(cost) = input.cost {
            active.cost = Set(cost);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a stock. Cascades to its mortality records and harvests
    /// (and, through harvests, their sales).
    ///
    /// # Errors
    ///
    /// Returns an error if the stock is not found or the operation fails.
    pub async fn delete(&self, stock_id: Uuid) -> Result<(), StockError> {
        let result = stocks::Entity::delete_by_id(stock_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StockError::NotFound(stock_id));
        }

        Ok(())
    }

    /// Computes the per-stock rollup from current ledger state.
    ///
    /// Plain consistent reads; no locks. Feed cost is attributed by pond,
    /// so concurrent stocks in one pond each see the pond's whole feed
    /// spend.
    ///
    /// # Errors
    ///
    /// Returns an error if the stock is not found or a query fails.
    pub async fn summary(&self, stock_id: Uuid) -> Result<StockSummary, StockError> {
        let stock = self.get(stock_id).await?;

        let total_mortality =
            lifecycle::mortality_total_excluding(&self.db, stock_id, None).await?;
        let total_harvest = lifecycle::harvest_total_excluding(&self.db, stock_id, None).await?;

        let feed_rows = feed_records::Entity::find()
            .filter(feed_records::Column::PondId.eq(stock.pond_id))
            .all(&self.db)
            .await?;

        let harvest_ids: Vec<Uuid> = harvests::Entity::find()
            .filter(harvests::Column::StockId.eq(stock_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|h| h.id)
            .collect();

        let sale_rows = if harvest_ids.is_empty() {
            vec![]
        } else {
            fish_sales::Entity::find()
                .filter(fish_sales::Column::HarvestId.is_in(harvest_ids))
                .all(&self.db)
                .await?
        };

        Ok(build_stock_summary(
            stock,
            total_mortality,
            total_harvest,
            aggregate::total_feed_cost(&feed_rows),
            aggregate::total_sale_revenue(&sale_rows),
        ))
    }
}

/// Assembles a stock summary from already-aggregated figures.
#[must_use]
pub fn build_stock_summary(
    stock: stocks::Model,
    total_mortality: i64,
    total_harvest: i64,
    total_feed_cost: Decimal,
    total_sale_revenue: Decimal,
) -> StockSummary {
    let remaining = remaining_quantity(i64::from(stock.quantity), total_mortality, total_harvest);
    let capital = total_capital(stock.cost, total_feed_cost);
    let net = profit(total_sale_revenue, capital);

    StockSummary {
        stock,
        total_mortality,
        total_harvest,
        remaining_quantity: remaining,
        total_feed_cost,
        total_sale_revenue,
        total_capital: capital,
        profit: net,
    }
}

#[cfg(test)]
#[path = "stock_tests.rs"]
mod tests;
