//! Fish sale repository.
//!
//! A sale always requires a harvest; cumulative sales may never exceed the
//! harvest's quantity. `total_amount` is derived at write time from
//! `quantity_kg × price_per_kg`, rounded to 2 dp.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use aqualedger_core::metrics::sale_total;
use aqualedger_shared::AppError;

use crate::entities::fish_sales;

use super::{lifecycle, lifecycle::LifecycleError};

/// Error types for sale operations.
#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    /// Sale not found.
    #[error("Sale not found: {0}")]
    NotFound(Uuid),

    /// Price cannot be negative.
    #[error("Price per kg cannot be negative")]
    NegativePrice,

    /// Lifecycle bound violation or missing harvest.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SaleError> for AppError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::NotFound(id) => Self::NotFound(format!("sale {id}")),
            SaleError::NegativePrice => Self::Validation {
                field: "price_per_kg".to_string(),
                message: "must not be negative".to_string(),
            },
            SaleError::Lifecycle(e) => e.into(),
            SaleError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a sale.
#[derive(Debug, Clone)]
pub struct CreateSaleInput {
    /// Harvest being sold from. Required.
    pub harvest_id: Uuid,
    /// Buyer name.
    pub buyer_name: String,
    /// Sold mass in kilograms.
    pub quantity_kg: i32,
    /// Unit price.
    pub price_per_kg: Decimal,
    /// Date of the sale.
    pub sale_date: NaiveDate,
}

/// Input for updating a sale.
#[derive(Debug, Clone, Default)]
pub struct UpdateSaleInput {
    /// Move the sale to another harvest.
    pub harvest_id: Option<Uuid>,
    /// New buyer name.
    pub buyer_name: Option<String>,
    /// New sold mass.
    pub quantity_kg: Option<i32>,
    /// New unit price.
    pub price_per_kg: Option<Decimal>,
    /// New date.
    pub sale_date: Option<NaiveDate>,
}

/// Fish sale repository.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    db: DatabaseConnection,
}

impl SaleRepository {
    /// Creates a new sale repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a sale against a harvest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The harvest does not exist
    /// - The price is negative
    /// - Cumulative sales would exceed the harvest quantity
    /// - The database operation fails
    pub async fn create(&self, input: CreateSaleInput) -> Result<fish_sales::Model, SaleError> {
        if input.price_per_kg < Decimal::ZERO {
            return Err(SaleError::NegativePrice);
        }

        let txn = self.db.begin().await?;

        let _harvest =
            lifecycle::guard_sale(&txn, input.harvest_id, i64::from(input.quantity_kg), None)
                .await?;

        let total = sale_total(i64::from(input.quantity_kg), input.price_per_kg);
        let now = Utc::now().into();

        let sale = fish_sales::ActiveModel {
            id: Set(Uuid::new_v4()),
            harvest_id: Set(input.harvest_id),
            buyer_name: Set(input.buyer_name),
            quantity_kg: Set(input.quantity_kg),
            price_per_kg: Set(input.price_per_kg),
            total_amount: Set(total),
            sale_date: Set(input.sale_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = sale.insert(&txn).await?;
        txn.commit().await?;
        Ok(result)
    }

    /// Gets a sale by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the sale is not found or the query fails.
    pub async fn get(&self, sale_id: Uuid) -> Result<fish_sales::Model, SaleError> {
        fish_sales::Entity::find_by_id(sale_id)
            .one(&self.db)
            .await?
            .ok_or(SaleError::NotFound(sale_id))
    }

    /// Lists sales for a harvest, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_harvest(
        &self,
        harvest_id: Uuid,
    ) -> Result<Vec<fish_sales::Model>, SaleError> {
        let sales = fish_sales::Entity::find()
            .filter(fish_sales::Column::HarvestId.eq(harvest_id))
            .order_by_desc(fish_sales::Column::SaleDate)
            .all(&self.db)
            .await?;
        Ok(sales)
    }

    /// Updates a sale.
    ///
    /// The bound is re-checked against the (possibly new) harvest over
    /// sibling sales only, and the stored total is re-derived whenever
    /// quantity or price changes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sale or harvest is not found
    /// - The price is negative
    /// - Cumulative sales would exceed the harvest quantity
    /// - The database operation fails
    pub async fn update(
        &self,
        sale_id: Uuid,
        input: UpdateSaleInput,
    ) -> Result<fish_sales::Model, SaleError> {
        let sale = self.get(sale_id).await?;

        let target_harvest = input.harvest_id.unwrap_or(sale.harvest_id);
        let target_quantity = input.quantity_kg.unwrap_or(sale.quantity_kg);
        let target_price = input.price_per_kg.unwrap_or(sale.price_per_kg);

        if target_price < Decimal::ZERO {
            return Err(SaleError::NegativePrice);
        }

        let txn = self.db.begin().await?;

        let _harvest = lifecycle::guard_sale(
            &txn,
            target_harvest,
            i64::from(target_quantity),
            Some(sale_id),
        )
        .await?;

        let mut active: fish_sales::ActiveModel = sale.into();

        active.harvest_id = Set(target_harvest);
        active.quantity_kg = Set(target_quantity);
        active.price_per_kg = Set(target_price);
        active.total_amount = Set(sale_total(i64::from(target_quantity), target_price));
        if let Some(buyer_name) = input.buyer_name {
            active.buyer_name = Set(buyer_name);
        }
        if let Some(sale_date) = input.sale_date {
            active.sale_date = Set(sale_date);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the sale is not found or the operation fails.
    pub async fn delete(&self, sale_id: Uuid) -> Result<(), SaleError> {
        let result = fish_sales::Entity::delete_by_id(sale_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(SaleError::NotFound(sale_id));
        }

        Ok(())
    }
}
