//! Expense Tracker is a web service for recording personal expenses.
//!
//! Expenses are tagged with a category and can be filtered by an inclusive
//! date range. The service exposes a JSON API for categories, expenses and
//! per-category summaries, and serves a dashboard page with a summary table
//! and a bar chart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error;
mod expense;
mod extract;
mod html;
mod logging;
mod not_found;
mod nullable;
mod routing;
mod stores;
mod summary;
mod timestamp;

pub use app_state::AppState;
pub use category::{Category, CategoryName, DEFAULT_CATEGORIES, NewCategory, SeedReport, seed_categories};
pub use database_id::{CategoryId, ExpenseId};
pub use db::Database;
pub use error::Error;
pub use expense::{NewExpense, create_expense};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use stores::{
    CategoryStore, ExpenseStore, SQLiteCategoryStore, SQLiteExpenseStore, StoreError,
};
pub use timestamp::resolve_timezone;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
