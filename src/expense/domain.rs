//! Core expense domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    category::Category,
    database_id::{CategoryId, ExpenseId},
};

/// An expense as held by the expense store, i.e., without its category resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much money was spent, always greater than zero.
    pub amount: f64,
    /// The category the expense belongs to. The category may have been deleted since.
    pub category_id: CategoryId,
    /// When the money was spent.
    pub date: OffsetDateTime,
    /// What the money was spent on.
    pub description: Option<String>,
    /// When the expense was recorded.
    pub created_at: OffsetDateTime,
    /// When the expense was last changed.
    pub updated_at: OffsetDateTime,
}

/// A single monetary outlay with its category resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much money was spent.
    pub amount: f64,
    /// The ID of the category the expense refers to.
    pub category_id: CategoryId,
    /// The category, or a placeholder named "Unknown" if it no longer exists.
    pub category: Category,
    /// When the money was spent.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// What the money was spent on.
    pub description: Option<String>,
    /// When the expense was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the expense was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Expense {
    /// Attach `category` to `record`.
    pub fn from_record(record: ExpenseRecord, category: Category) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            category_id: record.category_id,
            category,
            date: record.date,
            description: record.description,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// The caller supplied fields of a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// How much money was spent, must be greater than zero.
    pub amount: f64,
    /// The category of the expense, which must exist at creation time.
    pub category_id: CategoryId,
    /// When the money was spent.
    pub date: OffsetDateTime,
    /// What the money was spent on.
    pub description: Option<String>,
}

/// A partial update of an expense. Fields that are `None` are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    /// The new amount.
    pub amount: Option<f64>,
    /// The new category.
    pub category_id: Option<CategoryId>,
    /// The new date.
    pub date: Option<OffsetDateTime>,
    /// The new description, where `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl From<NewExpense> for ExpensePatch {
    fn from(value: NewExpense) -> Self {
        Self {
            amount: Some(value.amount),
            category_id: Some(value.category_id),
            date: Some(value.date),
            description: Some(value.description),
        }
    }
}
