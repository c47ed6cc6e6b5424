//! Category operations that combine store calls with the name rules.

use std::cmp::Ordering;

use crate::{
    Error,
    category::{Category, CategoryName, CategoryPatch, NewCategory},
    database_id::CategoryId,
    stores::CategoryStore,
};

/// Order categories by name ignoring letter case, with ties broken by the exact name.
fn compare_names(a: &Category, b: &Category) -> Ordering {
    let (a, b) = (a.name.as_ref(), b.name.as_ref());

    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Get all categories sorted by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_categories<C: CategoryStore>(store: &C) -> Result<Vec<Category>, Error> {
    let mut categories = store.list()?;
    categories.sort_by(compare_names);

    Ok(categories)
}

/// Get a category by ID.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no category with `category_id`.
pub fn get_category<C: CategoryStore>(category_id: CategoryId, store: &C) -> Result<Category, Error> {
    store.get(category_id)?.ok_or(Error::NotFound)
}

/// Check that no category other than `except` is called `name`, ignoring letter case.
///
/// The check and any following write are separate store calls, so two
/// concurrent requests for the same name may both pass.
fn ensure_name_is_free<C: CategoryStore>(
    name: &CategoryName,
    except: Option<CategoryId>,
    store: &C,
) -> Result<(), Error> {
    let categories = match store.list() {
        Ok(categories) => categories,
        Err(error) => {
            tracing::warn!("Could not check for duplicate category names, continuing anyway: {error}");
            return Ok(());
        }
    };

    let duplicate = categories
        .iter()
        .filter(|category| Some(category.id) != except)
        .any(|category| category.name.eq_ignore_case(name));

    if duplicate {
        Err(Error::DuplicateCategoryName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Create a category unless another category already has the same name,
/// ignoring letter case.
///
/// # Errors
///
/// Returns [Error::DuplicateCategoryName] if the name is taken, or an error
/// if the store fails.
pub fn create_category<C: CategoryStore>(new_category: NewCategory, store: &C) -> Result<Category, Error> {
    ensure_name_is_free(&new_category.name, None, store)?;

    store.create(new_category).map_err(Error::from)
}

/// Apply `patch` to a category and return the updated category.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no such category,
/// [Error::DuplicateCategoryName] if the new name belongs to another category,
/// or an error if the store fails.
pub fn update_category<C: CategoryStore>(
    category_id: CategoryId,
    patch: CategoryPatch,
    store: &C,
) -> Result<Category, Error> {
    if let Some(name) = &patch.name {
        ensure_name_is_free(name, Some(category_id), store)?;
    }

    store.update(category_id, patch)?;

    get_category(category_id, store)
}

/// Delete a category. Expenses that refer to it are kept.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn delete_category<C: CategoryStore>(category_id: CategoryId, store: &C) -> Result<(), Error> {
    store.delete(category_id).map_err(Error::from)
}
