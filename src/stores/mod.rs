//! Contains the traits and SQLite implementations for the objects that store
//! categories and expenses.

mod category;
mod error;
mod expense;

pub mod sqlite;

pub use category::CategoryStore;
pub use error::StoreError;
pub use expense::{ExpenseStore, TimestampRange};
pub use sqlite::{SQLiteCategoryStore, SQLiteExpenseStore};
