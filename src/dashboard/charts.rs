//! The category bar chart on the dashboard.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with a container element and a script that initialises it.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, summary::CategorySummary};

/// The HTML element ID of the chart container.
pub(super) const CATEGORY_CHART_ID: &str = "category-chart";

/// The URL the ECharts library is loaded from.
pub(super) const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// A bar per summary row showing the total spent in that category.
pub(super) fn category_chart(rows: &[CategorySummary]) -> Chart {
    let labels: Vec<String> = rows.iter().map(|row| row.name.clone()).collect();
    let values: Vec<f64> = rows.iter().map(|row| row.total).collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Total").data(values))
}

/// The container the chart is drawn into.
pub(super) fn chart_view() -> Markup {
    html!(
        div
            id=(CATEGORY_CHART_ID)
            class="min-h-[380px] rounded dark:bg-gray-100"
        {}
    )
}

/// A script that draws `chart` once the page has loaded.
pub(super) fn chart_script(chart: &Chart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CATEGORY_CHART_ID}"));
            chart.setOption({chart});
            window.addEventListener('resize', chart.resize);
        }});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
