//! Shared error taxonomy and configuration for AquaLedger.
//!
//! This crate provides the pieces every other crate relies on:
//! - Application-wide error types with status and error codes
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
