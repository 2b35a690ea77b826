//! Stock lifecycle validation.
//!
//! Every depleting write (mortality, harvest, sale) must pass a bound check
//! computed over *sibling* records only, inside the same transaction as the
//! write, with the parent row locked (`SELECT ... FOR UPDATE`) so that two
//! concurrent writers cannot both pass the check and together overshoot the
//! bound.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use uuid::Uuid;

use aqualedger_core::depletion::{
    check_depletion, check_quantity_floor, remaining_quantity, DepletionError,
};
use aqualedger_shared::AppError;

use crate::entities::{fish_sales, harvests, mortality_records, stocks};

use super::aggregate;

/// Error types for lifecycle validation.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// Referenced stock does not exist.
    #[error("Stock not found: {0}")]
    StockNotFound(Uuid),

    /// Referenced harvest does not exist.
    #[error("Harvest not found: {0}")]
    HarvestNotFound(Uuid),

    /// A depletion bound was violated; the write was refused.
    #[error(transparent)]
    Depletion(#[from] DepletionError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::StockNotFound(id) => Self::NotFound(format!("stock {id}")),
            LifecycleError::HarvestNotFound(id) => Self::NotFound(format!("harvest {id}")),
            LifecycleError::Depletion(e) => Self::InvariantViolation {
                field: e.field().to_string(),
                message: e.to_string(),
            },
            LifecycleError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Locks the stock row for the remainder of the transaction.
async fn lock_stock(
    txn: &DatabaseTransaction,
    stock_id: Uuid,
) -> Result<stocks::Model, LifecycleError> {
    stocks::Entity::find_by_id(stock_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(LifecycleError::StockNotFound(stock_id))
}

/// Locks the harvest row for the remainder of the transaction.
async fn lock_harvest(
    txn: &DatabaseTransaction,
    harvest_id: Uuid,
) -> Result<harvests::Model, LifecycleError> {
    harvests::Entity::find_by_id(harvest_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(LifecycleError::HarvestNotFound(harvest_id))
}

/// Σ `quantity_dead` over a stock's mortality records, optionally excluding
/// the record under update.
pub async fn mortality_total_excluding<C: ConnectionTrait>(
    conn: &C,
    stock_id: Uuid,
    exclude: Option<Uuid>,
) -> Result<i64, DbErr> {
    let mut query = mortality_records::Entity::find()
        .filter(mortality_records::Column::StockId.eq(stock_id));
    if let Some(excluded) = exclude {
        query = query.filter(mortality_records::Column::Id.ne(excluded));
    }
    Ok(aggregate::total_mortality(&query.all(conn).await?))
}

/// Σ `quantity_kg` over a stock's harvests, optionally excluding the record
/// under update.
pub async fn harvest_total_excluding<C: ConnectionTrait>(
    conn: &C,
    stock_id: Uuid,
    exclude: Option<Uuid>,
) -> Result<i64, DbErr> {
    let mut query = harvests::Entity::find().filter(harvests::Column::StockId.eq(stock_id));
    if let Some(excluded) = exclude {
        query = query.filter(harvests::Column::Id.ne(excluded));
    }
    Ok(aggregate::total_harvest(&query.all(conn).await?))
}

/// Σ `quantity_kg` over a harvest's sales, optionally excluding the record
/// under update.
pub async fn sales_total_excluding<C: ConnectionTrait>(
    conn: &C,
    harvest_id: Uuid,
    exclude: Option<Uuid>,
) -> Result<i64, DbErr> {
    let mut query = fish_sales::Entity::find().filter(fish_sales::Column::HarvestId.eq(harvest_id));
    if let Some(excluded) = exclude {
        query = query.filter(fish_sales::Column::Id.ne(excluded));
    }
    Ok(aggregate::total_sold(&query.all(conn).await?))
}

/// Validates a proposed mortality quantity against the stock's remainder.
///
/// Locks the stock, sums sibling mortality (excluding the record under
/// update) and all harvests, and checks the bound.
///
/// # Errors
///
/// Returns an error if the stock is missing, the bound is violated, or the
/// query fails.
pub async fn guard_mortality(
    txn: &DatabaseTransaction,
    stock_id: Uuid,
    proposed: i64,
    exclude: Option<Uuid>,
) -> Result<(), LifecycleError> {
    let stock = lock_stock(txn, stock_id).await?;
    let mortality = mortality_total_excluding(txn, stock_id, exclude).await?;
    let harvest = harvest_total_excluding(txn, stock_id, None).await?;
    let remaining = remaining_quantity(i64::from(stock.quantity), mortality, harvest);
    check_depletion("quantity_dead", remaining, proposed)?;
    Ok(())
}

/// Validates a proposed harvest quantity against the stock's remainder.
///
/// # Errors
///
/// Returns an error if the stock is missing, the bound is violated, or the
/// query fails.
pub async fn guard_harvest(
    txn: &DatabaseTransaction,
    stock_id: Uuid,
    proposed: i64,
    exclude: Option<Uuid>,
) -> Result<(), LifecycleError> {
    let stock = lock_stock(txn, stock_id).await?;
    let mortality = mortality_total_excluding(txn, stock_id, None).await?;
    let harvest = harvest_total_excluding(txn, stock_id, exclude).await?;
    let remaining = remaining_quantity(i64::from(stock.quantity), mortality, harvest);
    check_depletion("quantity_kg", remaining, proposed)?;
    Ok(())
}

/// Validates a proposed sale quantity against the harvest's remainder and
/// returns the locked harvest.
///
/// # Errors
///
/// Returns an error if the harvest is missing, the bound is violated, or
/// the query fails.
pub async fn guard_sale(
    txn: &DatabaseTransaction,
    harvest_id: Uuid,
    proposed: i64,
    exclude: Option<Uuid>,
) -> Result<harvests::Model, LifecycleError> {
    let harvest = lock_harvest(txn, harvest_id).await?;
    let sold = sales_total_excluding(txn, harvest_id, exclude).await?;
    let remaining = i64::from(harvest.quantity_kg) - sold;
    check_depletion("quantity_kg", remaining, proposed)?;
    Ok(harvest)
}

/// Validates that a stock's quantity may shrink to `proposed` without
/// stranding its mortality and harvest records.
///
/// # Errors
///
/// Returns an error if the stock is missing, the floor is violated, or the
/// query fails.
pub async fn guard_stock_quantity(
    txn: &DatabaseTransaction,
    stock_id: Uuid,
    proposed: i64,
) -> Result<(), LifecycleError> {
    let _stock = lock_stock(txn, stock_id).await?;
    let mortality = mortality_total_excluding(txn, stock_id, None).await?;
    let harvest = harvest_total_excluding(txn, stock_id, None).await?;
    check_quantity_floor("quantity", proposed, mortality + harvest)?;
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
