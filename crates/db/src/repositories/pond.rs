//! Pond repository for pond database operations.
//!
//! Ponds are reference data with no derived state; deleting a pond
//! cascades to its stocks and feed records.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_shared::AppError;

use crate::entities::ponds;

/// Error types for pond operations.
#[derive(Debug, thiserror::Error)]
pub enum PondError {
    /// Pond not found.
    #[error("Pond not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<PondError> for AppError {
    fn from(err: PondError) -> Self {
        match err {
            PondError::NotFound(id) => Self::NotFound(format!("pond {id}")),
            PondError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a pond.
#[derive(Debug, Clone)]
pub struct CreatePondInput {
    /// Pond name.
    pub name: String,
    /// Surface area in acres.
    pub size_acres: Decimal,
    /// Water source description.
    pub water_source: String,
    /// Optional location.
    pub location: Option<String>,
}

/// Input for updating a pond.
#[derive(Debug, Clone, Default)]
pub struct UpdatePondInput {
    /// New name.
    pub name: Option<String>,
    /// New surface area.
    pub size_acres: Option<Decimal>,
    /// New water source.
    pub water_source: Option<String>,
    /// New location.
    pub location: Option<Option<String>>,
}

/// Pond repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PondRepository {
    db: DatabaseConnection,
}

impl PondRepository {
    /// Creates a new pond repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pond.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, input: CreatePondInput) -> Result<ponds::Model, PondError> {
        let now = Utc::now().into();

        let pond = ponds::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            size_acres: Set(input.size_acres),
            water_source: Set(input.water_source),
            location: Set(input.location),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = pond.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets a pond by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the pond is not found or the query fails.
    pub async fn get(&self, pond_id: Uuid) -> Result<ponds::Model, PondError> {
        ponds::Entity::find_by_id(pond_id)
            .one(&self.db)
            .await?
            .ok_or(PondError::NotFound(pond_id))
    }

    /// Lists all ponds ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<ponds::Model>, PondError> {
        let ponds = ponds::Entity::find()
            .order_by_asc(ponds::Column::Name)
            .all(&self.db)
            .await?;
        Ok(ponds)
    }

    /// Updates a pond.
    ///
    /// # Errors
    ///
    /// Returns an error if the pond is not found or the operation fails.
    pub async fn update(
        &self,
        pond_id: Uuid,
        input: UpdatePondInput,
    ) -> Result<ponds::Model, PondError> {
        let pond = self.get(pond_id).await?;

        let mut active: ponds::ActiveModel = pond.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(size_acres) = input.size_acres {
            active.size_acres = Set(size_acres);
        }
        if let Some(water_source) = input.water_source {
            active.water_source = Set(water_source);
        }
        if let Some(location) = input.location {
            active.location = Set(location);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a pond. Cascades to its stocks and feed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the pond is not found or the operation fails.
    pub async fn delete(&self, pond_id: Uuid) -> Result<(), PondError> {
        let result = ponds::Entity::delete_by_id(pond_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(PondError::NotFound(pond_id));
        }

        Ok(())
    }
}
