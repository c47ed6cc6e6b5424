//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    category::{Category, CategoryName, CategoryPatch, NewCategory},
    database_id::CategoryId,
    stores::{CategoryStore, StoreError},
};

/// Creates and retrieves expense categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub(crate) fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn list(&self) -> Result<Vec<Category>, StoreError> {
        let connection = self.connection.lock()?;

        connection
            .prepare("SELECT id, name, description FROM category ORDER BY id ASC;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(StoreError::from))
            .collect()
    }

    fn get(&self, category_id: CategoryId) -> Result<Option<Category>, StoreError> {
        let connection = self.connection.lock()?;

        connection
            .prepare("SELECT id, name, description FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], map_row)
            .optional()
            .map_err(StoreError::from)
    }

    fn create(&self, new_category: NewCategory) -> Result<Category, StoreError> {
        let connection = self.connection.lock()?;

        connection.execute(
            "INSERT INTO category (name, description) VALUES (?1, ?2);",
            (new_category.name.as_ref(), &new_category.description),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            name: new_category.name,
            description: new_category.description,
        })
    }

    fn update(&self, category_id: CategoryId, patch: CategoryPatch) -> Result<(), StoreError> {
        let connection = self.connection.lock()?;

        let name = patch.name.as_ref().map(CategoryName::as_ref);
        let set_description = patch.description.is_some();
        let description = patch.description.flatten();

        let rows_affected = connection.execute(
            "UPDATE category
             SET name = COALESCE(?1, name),
                 description = CASE WHEN ?2 THEN ?3 ELSE description END
             WHERE id = ?4",
            (name, set_description, description, category_id),
        )?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    fn delete(&self, category_id: CategoryId) -> Result<(), StoreError> {
        let connection = self.connection.lock()?;

        connection.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

        Ok(())
    }
}

/// Initialize the category table.
///
/// Names are deliberately not unique at the storage level.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);
    let description = row.get(2)?;

    Ok(Category {
        id,
        name,
        description,
    })
}
