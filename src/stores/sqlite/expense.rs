//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};
use time::OffsetDateTime;

use crate::{
    database_id::ExpenseId,
    expense::{ExpensePatch, ExpenseRecord, NewExpense},
    stores::{ExpenseStore, StoreError, TimestampRange},
    timestamp::{from_millis, to_millis},
};

/// Stores expenses in a SQLite database.
///
/// The category of an expense is a plain ID rather than a foreign key, so
/// categories can be deleted while expenses still refer to them.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub(crate) fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn list(&self, range: &TimestampRange) -> Result<Vec<ExpenseRecord>, StoreError> {
        let connection = self.connection.lock()?;

        // Sort by date, and then ID to keep the order of same-day expenses stable.
        connection
            .prepare(
                "SELECT id, amount, category_id, date, description, created_at, updated_at
                 FROM expense
                 WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)
                 ORDER BY date DESC, id DESC",
            )?
            .query_map(
                (range.start.map(to_millis), range.end.map(to_millis)),
                map_row,
            )?
            .map(|row| row.map_err(StoreError::from).and_then(RawExpense::into_record))
            .collect()
    }

    fn get(&self, expense_id: ExpenseId) -> Result<Option<ExpenseRecord>, StoreError> {
        let connection = self.connection.lock()?;

        connection
            .prepare(
                "SELECT id, amount, category_id, date, description, created_at, updated_at
                 FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &expense_id)], map_row)
            .optional()?
            .map(RawExpense::into_record)
            .transpose()
    }

    fn create(&self, new_expense: NewExpense) -> Result<ExpenseRecord, StoreError> {
        let connection = self.connection.lock()?;
        let now = to_millis(OffsetDateTime::now_utc());

        connection
            .prepare(
                "INSERT INTO expense (amount, category_id, date, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 RETURNING id, amount, category_id, date, description, created_at, updated_at",
            )?
            .query_row(
                (
                    new_expense.amount,
                    new_expense.category_id,
                    to_millis(new_expense.date),
                    new_expense.description,
                    now,
                ),
                map_row,
            )?
            .into_record()
    }

    fn update(&self, expense_id: ExpenseId, patch: ExpensePatch) -> Result<(), StoreError> {
        let connection = self.connection.lock()?;
        let now = to_millis(OffsetDateTime::now_utc());

        let set_description = patch.description.is_some();
        let description = patch.description.flatten();

        let rows_affected = connection.execute(
            "UPDATE expense
             SET amount = COALESCE(?1, amount),
                 category_id = COALESCE(?2, category_id),
                 date = COALESCE(?3, date),
                 description = CASE WHEN ?4 THEN ?5 ELSE description END,
                 updated_at = ?6
             WHERE id = ?7",
            (
                patch.amount,
                patch.category_id,
                patch.date.map(to_millis),
                set_description,
                description,
                now,
                expense_id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    fn delete(&self, expense_id: ExpenseId) -> Result<(), StoreError> {
        let connection = self.connection.lock()?;

        connection.execute("DELETE FROM expense WHERE id = ?1", [expense_id])?;

        Ok(())
    }
}

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            amount REAL NOT NULL CHECK (amount > 0),
            category_id INTEGER NOT NULL,
            date INTEGER NOT NULL,
            description TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
    )?;

    Ok(())
}

/// An expense row with its timestamps still in their stored form.
struct RawExpense {
    id: ExpenseId,
    amount: f64,
    category_id: i64,
    date: i64,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl RawExpense {
    fn into_record(self) -> Result<ExpenseRecord, StoreError> {
        Ok(ExpenseRecord {
            id: self.id,
            amount: self.amount,
            category_id: self.category_id,
            date: from_millis(self.date)?,
            description: self.description,
            created_at: from_millis(self.created_at)?,
            updated_at: from_millis(self.updated_at)?,
        })
    }
}

fn map_row(row: &Row) -> Result<RawExpense, rusqlite::Error> {
    Ok(RawExpense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category_id: row.get(2)?,
        date: row.get(3)?,
        description: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
