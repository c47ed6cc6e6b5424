//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID of a [Category](crate::Category), assigned by the store on creation.
pub type CategoryId = DatabaseId;

/// The ID of an expense, assigned by the store on creation.
pub type ExpenseId = DatabaseId;
