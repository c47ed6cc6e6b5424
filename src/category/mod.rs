//! Categories group expenses, e.g., 'Food' or 'Transport'.

mod domain;
mod handlers;
mod ops;
mod seed;

pub use domain::{
    Category, CategoryFormData, CategoryName, CategoryPatch, CategoryPatchForm, NewCategory,
};
pub use handlers::{
    create_category_endpoint, delete_category_endpoint, get_category_endpoint,
    list_categories_endpoint, seed_categories_endpoint, update_category_endpoint,
};
pub use ops::{create_category, delete_category, get_category, list_categories, update_category};
pub use seed::{DEFAULT_CATEGORIES, SeedReport, seed_categories};
