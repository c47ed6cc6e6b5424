//! JSON endpoints for listing, creating, editing, deleting and seeding categories.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    category::{
        CategoryFormData, CategoryPatchForm, NewCategory, create_category, delete_category,
        get_category, list_categories, seed_categories, update_category,
    },
    database_id::CategoryId,
    endpoints::{self, format_endpoint},
    extract::{JsonBody, PathParam},
    stores::{CategoryStore, ExpenseStore},
};

/// List all categories sorted by name.
pub async fn list_categories_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let categories = list_categories(&state.category_store)?;

    Ok(Json(categories).into_response())
}

/// Create a category from a JSON body with a `name` and optional `description`.
///
/// Responds with 201 and the new category, or 400 if the name is blank or taken.
pub async fn create_category_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    JsonBody(form): JsonBody<CategoryFormData>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let new_category = NewCategory {
        name: form.name()?,
        description: form.description(),
    };

    let category = create_category(new_category, &state.category_store)?;
    tracing::info!("Created category {} \"{}\"", category.id, category.name);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format_endpoint(endpoints::CATEGORY, category.id))],
        Json(category),
    )
        .into_response())
}

/// Get a single category, or 404 if it does not exist.
pub async fn get_category_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(category_id): PathParam<CategoryId>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    get_category(category_id, &state.category_store).map(|category| Json(category).into_response())
}

/// Change the name and/or description of a category.
pub async fn update_category_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(category_id): PathParam<CategoryId>,
    JsonBody(form): JsonBody<CategoryPatchForm>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let patch = form.into_patch()?;

    update_category(category_id, patch, &state.category_store)
        .map(|category| Json(category).into_response())
}

/// Delete a category. Expenses in the category are kept and show up as "Unknown".
pub async fn delete_category_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(category_id): PathParam<CategoryId>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    delete_category(category_id, &state.category_store)?;

    Ok(Json(json!({ "message": "Category deleted" })).into_response())
}

/// Create any of the default categories that do not exist yet.
pub async fn seed_categories_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    seed_categories(&state.category_store).map(|report| Json(report).into_response())
}
