//! HTTP handler and page layout for the dashboard.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    dashboard::{
        charts::{ECHARTS_URL, category_chart, chart_script, chart_view},
        tables::{category_table, general_summary_view},
    },
    expense::DateFilterQuery,
    extract::QueryParams,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base,
    },
    stores::{CategoryStore, ExpenseStore},
    summary::{CategorySummary, GeneralSummary, category_summary},
    timestamp::resolve_timezone,
};

/// Display the dashboard with the category summary for the optional
/// `startDate` and `endDate`.
pub async fn get_dashboard_page<C, E>(
    State(state): State<AppState<C, E>>,
    QueryParams(filter): QueryParams<DateFilterQuery>,
) -> Result<Response, Error>
where
    C: CategoryStore + Send + Sync,
    E: ExpenseStore + Send + Sync,
{
    let timezone = resolve_timezone(&state.local_timezone)?;
    let range = filter.to_range(timezone)?;

    let rows = category_summary(
        &range,
        &state.category_store,
        &state.expense_store,
        timezone,
    )?;

    Ok(dashboard_view(&filter, &rows).into_response())
}

/// A form that reloads the page with a new date range.
fn date_filter_form(filter: &DateFilterQuery) -> Markup {
    let start_date = filter.start_date.as_deref().unwrap_or_default();
    let end_date = filter.end_date.as_deref().unwrap_or_default();

    html! {
        form
            id="date-filter"
            method="get"
            action=(endpoints::ROOT)
            class="flex flex-wrap items-end gap-4"
        {
            div
            {
                label for="startDate" class=(FORM_LABEL_STYLE) { "From" }
                input
                    id="startDate"
                    type="date"
                    name="startDate"
                    value=(start_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="endDate" class=(FORM_LABEL_STYLE) { "To" }
                input
                    id="endDate"
                    type="date"
                    name="endDate"
                    value=(end_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }

            a href=(endpoints::ROOT) class="text-blue-600 hover:text-blue-500 underline" { "Clear" }
        }
    }
}

fn dashboard_view(filter: &DateFilterQuery, rows: &[CategorySummary]) -> Markup {
    let summary = GeneralSummary::from_rows(rows);
    let chart = category_chart(rows);

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold" { "Expense Tracker" }

            (date_filter_form(filter))

            (general_summary_view(&summary))

            @if rows.is_empty() {
                p id="no-expenses" { "No expenses in this period." }
            } @else {
                (category_table(rows, &summary))
                (chart_view())
            }
        }
    );

    let head_elements = if rows.is_empty() {
        vec![]
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            chart_script(&chart),
        ]
    };

    base("Dashboard", &head_elements, &content)
}
