//! Implements a struct that holds the state of the REST server.

use crate::stores::{CategoryStore, ExpenseStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C, E>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    /// The store for managing expense [categories](crate::Category).
    pub category_store: C,

    /// The store for managing expenses.
    pub expense_store: E,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<C, E> AppState<C, E>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(category_store: C, expense_store: E, local_timezone: &str) -> Self {
        Self {
            category_store,
            expense_store,
            local_timezone: local_timezone.to_owned(),
        }
    }
}
