//! Defines the category store trait.

use crate::{
    category::{Category, CategoryPatch, NewCategory},
    database_id::CategoryId,
    stores::StoreError,
};

/// Creates, retrieves, updates and deletes expense categories.
///
/// The store does not enforce unique names, callers that need unique names
/// must check the existing categories before calling [CategoryStore::create].
pub trait CategoryStore {
    /// Get all categories in storage order.
    fn list(&self) -> Result<Vec<Category>, StoreError>;

    /// Get a category by its ID, or `None` if there is no such category.
    fn get(&self, category_id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// Create a new category and add it to the store.
    fn create(&self, new_category: NewCategory) -> Result<Category, StoreError>;

    /// Write the fields that are set in `patch` to the category.
    ///
    /// Returns [StoreError::NotFound] if there is no such category.
    fn update(&self, category_id: CategoryId, patch: CategoryPatch) -> Result<(), StoreError>;

    /// Delete a category. Deleting a category that does not exist is not an error.
    fn delete(&self, category_id: CategoryId) -> Result<(), StoreError>;
}
