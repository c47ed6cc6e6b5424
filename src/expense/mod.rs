//! Expenses are amounts of money spent on a date in a category.

mod domain;
mod filter;
mod handlers;
mod ops;
mod validation;

pub use domain::{Expense, ExpensePatch, ExpenseRecord, NewExpense};
pub use filter::DateFilterQuery;
pub use handlers::{
    create_expense_endpoint, delete_expense_endpoint, get_expense_endpoint,
    list_expenses_endpoint, patch_expense_endpoint, replace_expense_endpoint,
};
pub use ops::{create_expense, delete_expense, get_expense, list_expenses, update_expense};
pub use validation::{ExpenseForm, ExpensePatchForm};
