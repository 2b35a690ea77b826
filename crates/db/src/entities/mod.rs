//! `SeaORM` entity definitions for the production ledger.

pub mod expenses;
pub mod feed_records;
pub mod financial_reports;
pub mod fish_sales;
pub mod fish_species;
pub mod harvests;
pub mod mortality_records;
pub mod ponds;
pub mod production_cycles;
pub mod sea_orm_active_enums;
pub mod stocks;
