//! The dashboard page: a date filter, totals, a category table and a bar chart.

mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
