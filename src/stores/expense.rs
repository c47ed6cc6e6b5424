//! Defines the expense store trait.

use time::OffsetDateTime;

use crate::{
    database_id::ExpenseId,
    expense::{ExpensePatch, ExpenseRecord, NewExpense},
    stores::StoreError,
};

/// Handles the creation, retrieval and modification of expense records.
///
/// The store only deals with raw records. Resolving the category of an
/// expense is done by the operations in [crate::expense].
pub trait ExpenseStore {
    /// Get the expenses whose date is within `range`, newest first.
    fn list(&self, range: &TimestampRange) -> Result<Vec<ExpenseRecord>, StoreError>;

    /// Get an expense by its ID, or `None` if there is no such expense.
    fn get(&self, expense_id: ExpenseId) -> Result<Option<ExpenseRecord>, StoreError>;

    /// Add a new expense to the store.
    ///
    /// The creation and update timestamps are set by the store.
    fn create(&self, new_expense: NewExpense) -> Result<ExpenseRecord, StoreError>;

    /// Write the fields that are set in `patch` to the expense and refresh its
    /// update timestamp.
    ///
    /// Returns [StoreError::NotFound] if there is no such expense.
    fn update(&self, expense_id: ExpenseId, patch: ExpensePatch) -> Result<(), StoreError>;

    /// Delete an expense. Deleting an expense that does not exist is not an error.
    fn delete(&self, expense_id: ExpenseId) -> Result<(), StoreError>;
}

/// An inclusive range of instants where either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampRange {
    /// The earliest instant to include.
    pub start: Option<OffsetDateTime>,
    /// The latest instant to include.
    pub end: Option<OffsetDateTime>,
}

impl TimestampRange {
    /// A range that includes every instant.
    pub fn unbounded() -> Self {
        Self::default()
    }
}
