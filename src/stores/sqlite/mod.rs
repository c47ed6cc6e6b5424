//! SQLite implementations of the store traits.
//!
//! The stores share a single connection and must be created through
//! [Database](crate::Database), which creates the tables they need.

mod category;
mod expense;

pub use category::{SQLiteCategoryStore, create_category_table};
pub use expense::{SQLiteExpenseStore, create_expense_table};
