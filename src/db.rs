//! Opening, initialising and closing the application's database.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::stores::{
    SQLiteCategoryStore, SQLiteExpenseStore, StoreError,
    sqlite::{create_category_table, create_expense_table},
};

/// A handle to the SQLite database that backs the category and expense stores.
///
/// Open the database once at start up, hand the stores to the
/// [AppState](crate::AppState) and [close](Database::close) it on shut down.
#[derive(Debug, Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the database file at `path`, creating it and its tables if needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the tables cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let connection = Connection::open(path)?;

        Self::from_connection(connection)
    }

    /// Open a new, empty database that lives in memory.
    ///
    /// # Errors
    /// Returns an error if the tables cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let connection = Connection::open_in_memory()?;

        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self, StoreError> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// A category store that uses this database.
    pub fn category_store(&self) -> SQLiteCategoryStore {
        SQLiteCategoryStore::new(self.connection.clone())
    }

    /// An expense store that uses this database.
    pub fn expense_store(&self) -> SQLiteExpenseStore {
        SQLiteExpenseStore::new(self.connection.clone())
    }

    /// Close the database.
    ///
    /// The connection is only closed once every store created from this
    /// database has been dropped, otherwise it stays open until the last store
    /// is dropped.
    ///
    /// # Errors
    /// Returns an error if SQLite could not finish writing to the database.
    pub fn close(self) -> Result<(), StoreError> {
        match Arc::try_unwrap(self.connection) {
            Ok(connection) => {
                let connection = connection.into_inner()?;
                connection.close().map_err(|(_, error)| error.into())
            }
            Err(_) => {
                tracing::warn!("Database closed while stores are still in use");
                Ok(())
            }
        }
    }
}

/// Create the tables for the domain models if they do not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), StoreError> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
