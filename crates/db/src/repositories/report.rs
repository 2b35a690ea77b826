//! Financial report repository.
//!
//! Computes the yearly rollup live from the ledger and materializes it as
//! one `financial_reports` row per year. The snapshot is a cache: it is
//! recomputed in full on demand (never incrementally) and the unique year
//! index plus upsert keeps concurrent recomputations from racing to insert
//! duplicate rows.

use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_core::metrics::YearlyTotals;
use aqualedger_shared::AppError;

use crate::entities::{expenses, feed_records, financial_reports, fish_sales, production_cycles, stocks};

use super::aggregate;

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Year outside the representable calendar range.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Report not found.
    #[error("Report not found for year {0}")]
    NotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidYear(year) => Self::Validation {
                field: "year".to_string(),
                message: format!("{year} is not a valid calendar year"),
            },
            ReportError::NotFound(year) => Self::NotFound(format!("report for year {year}")),
            ReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Financial report repository: live yearly rollups plus snapshots.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the yearly rollup live from current ledger state.
    ///
    /// Each entity is filtered by its own date field: stocks by stocking
    /// date, feed by feed date, sales by sale date, and expenses through
    /// the stocking date of their owning cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of range or a query fails.
    pub async fn yearly_totals(&self, year: i32) -> Result<YearlyTotals, ReportError> {
        let (start, end) = year_bounds(year).ok_or(ReportError::InvalidYear(year))?;

        let stock_rows = stocks::Entity::find()
            .filter(stocks::Column::StockingDate.gte(start))
            .filter(stocks::Column::StockingDate.lte(end))
            .all(&self.db)
            .await?;

        let feed_rows = feed_records::Entity::find()
            .filter(feed_records::Column::Date.gte(start))
            .filter(feed_records::Column::Date.lte(end))
            .all(&self.db)
            .await?;

        let cycle_ids: Vec<Uuid> = production_cycles::Entity::find()
            .filter(production_cycles::Column::StockingDate.gte(start))
            .filter(production_cycles::Column::StockingDate.lte(end))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let expense_rows = if cycle_ids.is_empty() {
            vec![]
        } else {
            expenses::Entity::find()
                .filter(expenses::Column::CycleId.is_in(cycle_ids))
                .all(&self.db)
                .await?
        };
        let (medicine, other) = aggregate::split_expenses(&expense_rows);

        let sale_rows = fish_sales::Entity::find()
            .filter(fish_sales::Column::SaleDate.gte(start))
            .filter(fish_sales::Column::SaleDate.lte(end))
            .all(&self.db)
            .await?;

        Ok(YearlyTotals {
            year,
            total_fish_purchase: aggregate::total_stock_cost(&stock_rows),
            total_feed_purchase: aggregate::total_feed_cost(&feed_rows),
            total_medicine_purchase: medicine,
            total_other_expenses: other,
            total_sales_revenue: aggregate::total_sale_revenue(&sale_rows),
        })
    }

    /// Recomputes and persists the report snapshot for a year.
    ///
    /// Upserts by the unique `year` column, so repeated and concurrent
    /// recomputations converge on a single row. Idempotent: with no
    /// intervening ledger changes, two runs yield identical field values.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of range or the write fails.
    pub async fn calculate_totals(
        &self,
        year: i32,
    ) -> Result<financial_reports::Model, ReportError> {
        let totals = self.yearly_totals(year).await?;
        let now = Utc::now().into();

        let report = financial_reports::ActiveModel {
            id: Set(Uuid::new_v4()),
            year: Set(year),
            total_fish_purchase: Set(totals.total_fish_purchase),
            total_feed_purchase: Set(totals.total_feed_purchase),
            total_medicine_purchase: Set(totals.total_medicine_purchase),
            total_other_expenses: Set(totals.total_other_expenses),
            total_investment: Set(totals.total_investment()),
            total_sales_revenue: Set(totals.total_sales_revenue),
            roi_percentage: Set(totals.roi_percentage()),
            net_profit: Set(totals.net_profit()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        financial_reports::Entity::insert(report)
            .on_conflict(
                OnConflict::column(financial_reports::Column::Year)
                    .update_columns([
                        financial_reports::Column::TotalFishPurchase,
                        financial_reports::Column::TotalFeedPurchase,
                        financial_reports::Column::TotalMedicinePurchase,
                        financial_reports::Column::TotalOtherExpenses,
                        financial_reports::Column::TotalInvestment,
                        financial_reports::Column::TotalSalesRevenue,
                        financial_reports::Column::RoiPercentage,
                        financial_reports::Column::NetProfit,
                        financial_reports::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        tracing::info!(year, "financial report snapshot refreshed");
        self.get_report(year).await
    }

    /// Gets the persisted snapshot for a year.
    ///
    /// # Errors
    ///
    /// Returns an error if no snapshot exists for the year or the query
    /// fails.
    pub async fn get_report(&self, year: i32) -> Result<financial_reports::Model, ReportError> {
        financial_reports::Entity::find()
            .filter(financial_reports::Column::Year.eq(year))
            .one(&self.db)
            .await?
            .ok_or(ReportError::NotFound(year))
    }

    /// Lists all persisted snapshots, newest year first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_reports(&self) -> Result<Vec<financial_reports::Model>, ReportError> {
        let reports = financial_reports::Entity::find()
            .order_by_desc(financial_reports::Column::Year)
            .all(&self.db)
            .await?;
        Ok(reports)
    }
}

/// First and last day of a calendar year, when representable.
#[must_use]
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((start, end))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
