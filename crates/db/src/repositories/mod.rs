//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every mutation of a depleting record (mortality, harvest, sale) runs
//! the lifecycle guard in `lifecycle` before committing.

pub mod aggregate;
pub mod cycle;
pub mod expense;
pub mod feed;
pub mod harvest;
pub mod lifecycle;
pub mod mortality;
pub mod pond;
pub mod report;
pub mod sale;
pub mod species;
pub mod stock;

pub use cycle::{
    CreateCycleInput, CycleError, CycleRepository, CycleSummary, UpdateCycleInput,
};
pub use expense::{CreateExpenseInput, ExpenseError, ExpenseRepository, UpdateExpenseInput};
pub use feed::{CreateFeedInput, FeedError, FeedRepository, UpdateFeedInput};
pub use harvest::{CreateHarvestInput, HarvestError, HarvestRepository, UpdateHarvestInput};
pub use lifecycle::LifecycleError;
pub use mortality::{
    CreateMortalityInput, MortalityError, MortalityRepository, UpdateMortalityInput,
};
pub use pond::{CreatePondInput, PondError, PondRepository, UpdatePondInput};
pub use report::{ReportError, ReportRepository};
pub use sale::{CreateSaleInput, SaleError, SaleRepository, UpdateSaleInput};
pub use species::{CreateSpeciesInput, SpeciesError, SpeciesRepository, UpdateSpeciesInput};
pub use stock::{CreateStockInput, StockError, StockRepository, StockSummary, UpdateStockInput};
