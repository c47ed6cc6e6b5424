//! Expense operations that resolve categories and check category references.

use std::collections::HashMap;

use time_tz::Tz;

use crate::{
    Error,
    category::Category,
    database_id::{CategoryId, ExpenseId},
    expense::{Expense, ExpensePatch, ExpenseRecord, NewExpense},
    stores::{CategoryStore, ExpenseStore, TimestampRange},
    timestamp::to_local,
};

/// Attach `category` to `record` and express its timestamps in `timezone`.
fn to_expense(record: ExpenseRecord, category: Category, timezone: &Tz) -> Expense {
    let mut expense = Expense::from_record(record, category);
    expense.date = to_local(expense.date, timezone);
    expense.created_at = to_local(expense.created_at, timezone);
    expense.updated_at = to_local(expense.updated_at, timezone);

    expense
}

/// Get the category with `category_id`, or the "Unknown" placeholder if it has been deleted.
fn resolve_category<C: CategoryStore>(
    category_id: CategoryId,
    category_store: &C,
) -> Result<Category, Error> {
    Ok(category_store
        .get(category_id)?
        .unwrap_or_else(|| Category::unknown(category_id)))
}

/// Fail with [Error::CategoryNotFound] unless `category_id` refers to a category.
fn ensure_category_exists<C: CategoryStore>(
    category_id: CategoryId,
    category_store: &C,
) -> Result<(), Error> {
    match category_store.get(category_id)? {
        Some(_) => Ok(()),
        None => Err(Error::CategoryNotFound(category_id.to_string())),
    }
}

/// Get the expenses in `range`, newest first, each with its category.
///
/// The categories are fetched once for the whole list.
///
/// # Errors
///
/// Returns an error if either store fails.
pub fn list_expenses<C, E>(
    range: &TimestampRange,
    category_store: &C,
    expense_store: &E,
    timezone: &Tz,
) -> Result<Vec<Expense>, Error>
where
    C: CategoryStore,
    E: ExpenseStore,
{
    let records = expense_store.list(range)?;
    let categories: HashMap<CategoryId, Category> = category_store
        .list()?
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    let expenses = records
        .into_iter()
        .map(|record| {
            let category = categories
                .get(&record.category_id)
                .cloned()
                .unwrap_or_else(|| Category::unknown(record.category_id));

            to_expense(record, category, timezone)
        })
        .collect();

    Ok(expenses)
}

/// Get a single expense with its category.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no expense with `expense_id`.
pub fn get_expense<C, E>(
    expense_id: ExpenseId,
    category_store: &C,
    expense_store: &E,
    timezone: &Tz,
) -> Result<Expense, Error>
where
    C: CategoryStore,
    E: ExpenseStore,
{
    let record = expense_store.get(expense_id)?.ok_or(Error::NotFound)?;
    let category = resolve_category(record.category_id, category_store)?;

    Ok(to_expense(record, category, timezone))
}

/// Record a new expense in an existing category.
///
/// The category check and the insert are separate store calls, so a category
/// deleted in between leaves the new expense in the "Unknown" category.
///
/// # Errors
///
/// Returns [Error::CategoryNotFound] if the category does not exist, in
/// which case nothing is stored.
pub fn create_expense<C, E>(
    new_expense: NewExpense,
    category_store: &C,
    expense_store: &E,
    timezone: &Tz,
) -> Result<Expense, Error>
where
    C: CategoryStore,
    E: ExpenseStore,
{
    let category = category_store
        .get(new_expense.category_id)?
        .ok_or_else(|| Error::CategoryNotFound(new_expense.category_id.to_string()))?;

    let record = expense_store.create(new_expense)?;

    Ok(to_expense(record, category, timezone))
}

/// Write the fields that are set in `patch` and return the updated expense.
///
/// # Errors
///
/// Returns [Error::NotFound] if the expense does not exist and
/// [Error::CategoryNotFound] if the patch moves it to a category that does not exist.
pub fn update_expense<C, E>(
    expense_id: ExpenseId,
    patch: ExpensePatch,
    category_store: &C,
    expense_store: &E,
    timezone: &Tz,
) -> Result<Expense, Error>
where
    C: CategoryStore,
    E: ExpenseStore,
{
    if expense_store.get(expense_id)?.is_none() {
        return Err(Error::NotFound);
    }

    if let Some(category_id) = patch.category_id {
        ensure_category_exists(category_id, category_store)?;
    }

    expense_store.update(expense_id, patch)?;

    get_expense(expense_id, category_store, expense_store, timezone)
}

/// Delete an expense. Deleting an expense that does not exist succeeds.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn delete_expense<E: ExpenseStore>(expense_id: ExpenseId, expense_store: &E) -> Result<(), Error> {
    expense_store.delete(expense_id).map_err(Error::from)
}
