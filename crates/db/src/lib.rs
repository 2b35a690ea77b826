//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the production ledger
//! - Repository abstractions enforcing the stock lifecycle invariants
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    CycleRepository, ExpenseRepository, FeedRepository, HarvestRepository, MortalityRepository,
    PondRepository, ReportRepository, SaleRepository, SpeciesRepository, StockRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
