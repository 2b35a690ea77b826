//! Fish species repository.
//!
//! Reference data; deleting a species cascades to its stocks and cycles.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_shared::AppError;

use crate::entities::fish_species;

/// Error types for species operations.
#[derive(Debug, thiserror::Error)]
pub enum SpeciesError {
    /// Species not found.
    #[error("Species not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SpeciesError> for AppError {
    fn from(err: SpeciesError) -> Self {
        match err {
            SpeciesError::NotFound(id) => Self::NotFound(format!("species {id}")),
            SpeciesError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a species.
#[derive(Debug, Clone)]
pub struct CreateSpeciesInput {
    /// Species name.
    pub name: String,
    /// Typical days from stocking to harvestable size.
    pub average_growth_days: i32,
}

/// Input for updating a species.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpeciesInput {
    /// New name.
    pub name: Option<String>,
    /// New growth duration.
    pub average_growth_days: Option<i32>,
}

/// Species repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SpeciesRepository {
    db: DatabaseConnection,
}

impl SpeciesRepository {
    /// Creates a new species repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new species.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        input: CreateSpeciesInput,
    ) -> Result<fish_species::Model, SpeciesError> {
        let now = Utc::now().into();

        let species = fish_species::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            average_growth_days: Set(input.average_growth_days),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = species.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets a species by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the species is not found or the query fails.
    pub async fn get(&self, species_id: Uuid) -> Result<fish_species::Model, SpeciesError> {
        fish_species::Entity::find_by_id(species_id)
            .one(&self.db)
            .await?
            .ok_or(SpeciesError::NotFound(species_id))
    }

    /// Lists all species ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<fish_species::Model>, SpeciesError> {
        let species = fish_species::Entity::find()
            .order_by_asc(fish_species::Column::Name)
            .all(&self.db)
            .await?;
        Ok(species)
    }

    /// Updates a species.
    ///
    /// # Errors
    ///
    /// Returns an error if the species is not found or the operation fails.
    pub async fn update(
        &self,
        species_id: Uuid,
        input: UpdateSpeciesInput,
    ) -> Result<fish_species::Model, SpeciesError> {
        let species = self.get(species_id).await?;

        let mut active: fish_species::ActiveModel = species.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(days) = input.average_growth_days {
            active.average_growth_days = Set(days);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a species.
    ///
    /// # Errors
    ///
    /// Returns an error if the species is not found or the operation fails.
    pub async fn delete(&self, species_id: Uuid) -> Result<(), SpeciesError> {
        let result = fish_species::Entity::delete_by_id(species_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(SpeciesError::NotFound(species_id));
        }

        Ok(())
    }
}
