//! Feed record repository.
//!
//! Feed is attributed to a pond; a cycle tag is optional and severed (not
//! cascaded) when the cycle is deleted.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_shared::AppError;

use crate::entities::{feed_records, ponds, production_cycles};

/// Error types for feed operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Feed record not found.
    #[error("Feed record not found: {0}")]
    NotFound(Uuid),

    /// Pond not found.
    #[error("Pond not found: {0}")]
    PondNotFound(Uuid),

    /// Production cycle not found.
    #[error("Production cycle not found: {0}")]
    CycleNotFound(Uuid),

    /// Quantity cannot be negative.
    #[error("Feed quantity cannot be negative")]
    NegativeQuantity,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::NotFound(id) => Self::NotFound(format!("feed record {id}")),
            FeedError::PondNotFound(id) => Self::NotFound(format!("pond {id}")),
            FeedError::CycleNotFound(id) => Self::NotFound(format!("production cycle {id}")),
            FeedError::NegativeQuantity => Self::Validation {
                field: "quantity_kg".to_string(),
                message: "must not be negative".to_string(),
            },
            FeedError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a feed record.
#[derive(Debug, Clone)]
pub struct CreateFeedInput {
    /// Pond the feed went into.
    pub pond_id: Uuid,
    /// Optional cycle tag.
    pub cycle_id: Option<Uuid>,
    /// Feed type description.
    pub feed_type: String,
    /// Mass fed, in kilograms.
    pub quantity_kg: Decimal,
    /// Purchase cost.
    pub cost: Decimal,
    /// Date of feeding.
    pub date: NaiveDate,
}

/// Input for updating a feed record.
#[derive(Debug, Clone, Default)]
pub struct UpdateFeedInput {
    /// New cycle tag (outer `None` keeps, inner `None` clears).
    pub cycle_id: Option<Option<Uuid>>,
    /// New feed type.
    pub feed_type: Option<String>,
    /// New mass.
    pub quantity_kg: Option<Decimal>,
    /// New cost.
    pub cost: Option<Decimal>,
    /// New date.
    pub date: Option<NaiveDate>,
}

/// Feed record repository.
#[derive(Debug, Clone)]
pub struct FeedRepository {
    db: DatabaseConnection,
}

impl FeedRepository {
    /// Creates a new feed repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a feeding.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pond or cycle does not exist
    /// - The quantity is negative
    /// - The database operation fails
    pub async fn create(&self, input: CreateFeedInput) -> Result<feed_records::Model, FeedError> {
        if input.quantity_kg < Decimal::ZERO {
            return Err(FeedError::NegativeQuantity);
        }

        let _pond = ponds::Entity::find_by_id(input.pond_id)
            .one(&self.db)
            .await?
            .ok_or(FeedError::PondNotFound(input.pond_id))?;

        if let Some(cycle_id) = input.cycle_id {
            self.ensure_cycle_exists(cycle_id).await?;
        }

        let now = Utc::now().into();

        let record = feed_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            pond_id: Set(input.pond_id),
            cycle_id: Set(input.cycle_id),
            feed_type: Set(input.feed_type),
            quantity_kg: Set(input.quantity_kg),
            cost: Set(input.cost),
            date: Set(input.date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = record.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets a feed record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the query fails.
    pub async fn get(&self, record_id: Uuid) -> Result<feed_records::Model, FeedError> {
        feed_records::Entity::find_by_id(record_id)
            .one(&self.db)
            .await?
            .ok_or(FeedError::NotFound(record_id))
    }

    /// Lists feed records for a pond, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_pond(
        &self,
        pond_id: Uuid,
    ) -> Result<Vec<feed_records::Model>, FeedError> {
        let records = feed_records::Entity::find()
            .filter(feed_records::Column::PondId.eq(pond_id))
            .order_by_desc(feed_records::Column::Date)
            .all(&self.db)
            .await?;
        Ok(records)
    }

    /// Updates a feed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record or cycle is not found, the quantity
    /// is negative, or the operation fails.
    pub async fn update(
        &self,
        record_id: Uuid,
        input: UpdateFeedInput,
    ) -> Result<feed_records::Model, FeedError> {
        let record = self.get(record_id).await?;

        if let Some(quantity_kg) = input.quantity_kg {
            if quantity_kg < Decimal::ZERO {
                return Err(FeedError::NegativeQuantity);
            }
        }

        if let Some(Some(cycle_id)) = input.cycle_id {
            self.ensure_cycle_exists(cycle_id).await?;
        }

        let mut active: feed_records::ActiveModel = record.into();

        if let Some(cycle_id) = input.cycle_id {
            active.cycle_id = Set(cycle_id);
        }
        if let Some(feed_type) = input.feed_type {
            active.feed_type = Set(feed_type);
        }
        if let Some(quantity_kg) = input.quantity_kg {
            active.quantity_kg = Set(quantity_kg);
        }
        if let Some(cost) = input.cost {
            active.cost = Set(cost);
        }
        if let Some(date) = input.date {
            active.date = Set(date);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a feed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the operation fails.
    pub async fn delete(&self, record_id: Uuid) -> Result<(), FeedError> {
        let result = feed_records::Entity::delete_by_id(record_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(FeedError::NotFound(record_id));
        }

        Ok(())
    }

    /// Verifies the cycle tag points at an existing cycle.
    async fn ensure_cycle_exists(&self, cycle_id: Uuid) -> Result<(), FeedError> {
        production_cycles::Entity::find_by_id(cycle_id)
            .one(&self.db)
            .await?
            .ok_or(FeedError::CycleNotFound(cycle_id))?;
        Ok(())
    }
}
