//! JSON endpoints for expenses.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints::{self, format_endpoint},
    expense::{
        DateFilterQuery, ExpenseForm, ExpensePatch, ExpensePatchForm, create_expense,
        delete_expense, get_expense, list_expenses, update_expense,
    },
    extract::{JsonBody, PathParam, QueryParams},
    stores::{CategoryStore, ExpenseStore},
    timestamp::resolve_timezone,
};

/// List the expenses between the optional `startDate` and `endDate`, newest first.
pub async fn list_expenses_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    QueryParams(filter): QueryParams<DateFilterQuery>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let range = filter.to_range(timezone)?;

    let expenses = list_expenses(
        &range,
        &state.category_store,
        &state.expense_store,
        timezone,
    )?;

    Ok(Json(expenses).into_response())
}

/// Record a new expense.
///
/// Responds with 201 and the expense, 400 if the body is invalid or 422 if
/// the category does not exist.
pub async fn create_expense_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    JsonBody(form): JsonBody<ExpenseForm>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let new_expense = form.validate(timezone)?;

    let expense = create_expense(
        new_expense,
        &state.category_store,
        &state.expense_store,
        timezone,
    )?;
    tracing::info!("Created expense {} of {}", expense.id, expense.amount);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format_endpoint(endpoints::EXPENSE, expense.id))],
        Json(expense),
    )
        .into_response())
}

/// Get a single expense, or 404 if it does not exist.
pub async fn get_expense_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(expense_id): PathParam<ExpenseId>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;

    get_expense(
        expense_id,
        &state.category_store,
        &state.expense_store,
        timezone,
    )
    .map(|expense| Json(expense).into_response())
}

/// Replace every field of an expense. The body is validated like a new expense.
pub async fn replace_expense_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(expense_id): PathParam<ExpenseId>,
    JsonBody(form): JsonBody<ExpenseForm>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let patch = ExpensePatch::from(form.validate(timezone)?);

    update_expense(
        expense_id,
        patch,
        &state.category_store,
        &state.expense_store,
        timezone,
    )
    .map(|expense| Json(expense).into_response())
}

/// Change only the fields of an expense that are present in the body.
pub async fn patch_expense_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(expense_id): PathParam<ExpenseId>,
    JsonBody(form): JsonBody<ExpensePatchForm>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let patch = form.validate(timezone)?;

    update_expense(
        expense_id,
        patch,
        &state.category_store,
        &state.expense_store,
        timezone,
    )
    .map(|expense| Json(expense).into_response())
}

/// Delete an expense.
pub async fn delete_expense_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    PathParam(expense_id): PathParam<ExpenseId>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    delete_expense(expense_id, &state.expense_store)?;

    Ok(Json(json!({ "message": "Expense deleted" })).into_response())
}
