//! The summary cards and the category table on the dashboard.

use maud::{Markup, html};

use crate::{
    html::{CARD_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    summary::{CategorySummary, GeneralSummary},
};

/// Cards with the grand total, the number of expenses and categories, and
/// the average per category.
pub(super) fn general_summary_view(summary: &GeneralSummary) -> Markup {
    html! {
        section id="general-summary" class="grid grid-cols-2 lg:grid-cols-4 gap-4"
        {
            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500" { "Total Spent" }
                p class="text-2xl font-bold text-blue-600" { (format_currency(summary.total)) }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500" { "Expenses" }
                p class="text-xl font-semibold" { (summary.count) }
            }

            div class=(CARD_STYLE)
            {
                p class="text-sm text-gray-500" { "Categories" }
                p class="text-xl font-semibold" { (summary.category_count) }
            }

            @if let Some(average) = summary.average_per_category {
                div class=(CARD_STYLE)
                {
                    p class="text-sm text-gray-500" { "Average per Category" }
                    p class="text-xl font-semibold" { (format_currency(average)) }
                }
            }
        }
    }
}

/// A table with a row per category name and a total row at the bottom.
pub(super) fn category_table(rows: &[CategorySummary], summary: &GeneralSummary) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table id="category-summary" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Expenses" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    }
                }

                tbody
                {
                    @for row in rows {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} { (row.name) }
                            td class=(TABLE_CELL_STYLE) { (row.count) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(row.total)) }
                        }
                    }
                }

                tfoot
                {
                    tr class="font-semibold text-gray-900 dark:text-white"
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { "Total" }
                        td class=(TABLE_CELL_STYLE) { (summary.count) }
                        td class=(TABLE_CELL_STYLE) { (format_currency(summary.total)) }
                    }
                }
            }
        }
    }
}
