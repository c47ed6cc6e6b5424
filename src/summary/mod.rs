//! Per-category totals over a date range.

mod aggregation;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use time_tz::Tz;

pub use aggregation::{CategorySummary, GeneralSummary, summarize_by_category};

use crate::{
    AppState, Error,
    expense::{DateFilterQuery, list_expenses},
    extract::QueryParams,
    stores::{CategoryStore, ExpenseStore, TimestampRange},
    timestamp::resolve_timezone,
};

/// Summarise the expenses in `range` by category name.
///
/// # Errors
///
/// Returns an error if either store fails.
pub fn category_summary<C, E>(
    range: &TimestampRange,
    category_store: &C,
    expense_store: &E,
    timezone: &Tz,
) -> Result<Vec<CategorySummary>, Error>
where
    C: CategoryStore,
    E: ExpenseStore,
{
    let expenses = list_expenses(range, category_store, expense_store, timezone)?;

    Ok(summarize_by_category(&expenses))
}

/// Get the per-category summary for the optional `startDate` and `endDate`.
pub async fn get_summary_endpoint<C, E>(
    State(state): State<AppState<C, E>>,
    QueryParams(filter): QueryParams<DateFilterQuery>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let range = filter.to_range(timezone)?;

    category_summary(
        &range,
        &state.category_store,
        &state.expense_store,
        timezone,
    )
    .map(|summary| Json(summary).into_response())
}
