//! Expense repository.
//!
//! Generic cost lines owned by a production cycle. Classification into
//! medicine vs other happens at report time from the description text.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use aqualedger_shared::AppError;

use crate::entities::{expenses, production_cycles};

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(Uuid),

    /// Production cycle not found.
    #[error("Production cycle not found: {0}")]
    CycleNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(id) => Self::NotFound(format!("expense {id}")),
            ExpenseError::CycleNotFound(id) => Self::NotFound(format!("production cycle {id}")),
            ExpenseError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Owning cycle.
    pub cycle_id: Uuid,
    /// Free-text description. "medicine" anywhere in it classifies the
    /// line as a medicine purchase in yearly reports.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub expense_date: NaiveDate,
}

/// Input for updating an expense.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    /// New description.
    pub description: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New date.
    pub expense_date: Option<NaiveDate>,
}

/// Expense repository.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense against a cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle does not exist or the operation fails.
    pub async fn create(&self, input: CreateExpenseInput) -> Result<expenses::Model, ExpenseError> {
        let _cycle = production_cycles::Entity::find_by_id(input.cycle_id)
            .one(&self.db)
            .await?
            .ok_or(ExpenseError::CycleNotFound(input.cycle_id))?;

        let now = Utc::now().into();

        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            cycle_id: Set(input.cycle_id),
            description: Set(input.description),
            amount: Set(input.amount),
            expense_date: Set(input.expense_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = expense.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense is not found or the query fails.
    pub async fn get(&self, expense_id: Uuid) -> Result<expenses::Model, ExpenseError> {
        expenses::Entity::find_by_id(expense_id)
            .one(&self.db)
            .await?
            .ok_or(ExpenseError::NotFound(expense_id))
    }

    /// Lists expenses for a cycle, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_cycle(
        &self,
        cycle_id: Uuid,
    ) -> Result<Vec<expenses::Model>, ExpenseError> {
        let expenses = expenses::Entity::find()
            .filter(expenses::Column::CycleId.eq(cycle_id))
            .order_by_desc(expenses::Column::ExpenseDate)
            .all(&self.db)
            .await?;
        Ok(expenses)
    }

    /// Updates an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense is not found or the operation fails.
    pub async fn update(
        &self,
        expense_id: Uuid,
        input: UpdateExpenseInput,
    ) -> Result<expenses::Model, ExpenseError> {
        let expense = self.get(expense_id).await?;

        let mut active: expenses::ActiveModel = expense.into();

        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(amount) = input.amount {
            active.amount = Set(amount);
        }
        if let Some(expense_date) = input.expense_date {
            active.expense_date = Set(expense_date);
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense is not found or the operation fails.
    pub async fn delete(&self, expense_id: Uuid) -> Result<(), ExpenseError> {
        let result = expenses::Entity::delete_by_id(expense_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ExpenseError::NotFound(expense_id));
        }

        Ok(())
    }
}
