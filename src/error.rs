//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::stores::StoreError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body was not JSON or did not have the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// A path parameter, such as an ID, could not be read.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The query string could not be read.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The expense amount was missing, not a number or not greater than zero.
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// The expense did not specify a category.
    #[error("Category is required")]
    MissingCategoryId,

    /// The expense did not specify a date.
    #[error("Date is required")]
    MissingDate,

    /// The expense date could not be parsed.
    ///
    /// Callers should pass in the date string that caused the error.
    #[error("Date \"{0}\" is not valid")]
    InvalidDate(String),

    /// A date used for filtering was not a calendar date in the format
    /// `YYYY-MM-DD`.
    #[error("Filter date \"{0}\" is not valid, use the format YYYY-MM-DD")]
    InvalidDateFilter(String),

    /// A missing, non-text or blank string was used to create a category name.
    #[error("Category name is required and must be non-empty text")]
    EmptyCategoryName,

    /// Another category already has this name, ignoring letter case.
    #[error("A category named \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// The category ID given for an expense does not refer to an existing category.
    #[error("The category with ID {0} does not exist")]
    CategoryNotFound(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The store failed to carry out an operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The JSON body of an error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// A human readable description of what went wrong.
    pub error: String,

    /// More detail for debugging. Only included in debug builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Error {
    /// The HTTP status code that should be sent to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequestBody(_)
            | Error::InvalidPath(_)
            | Error::InvalidQuery(_)
            | Error::InvalidAmount
            | Error::MissingCategoryId
            | Error::MissingDate
            | Error::InvalidDate(_)
            | Error::InvalidDateFilter(_)
            | Error::EmptyCategoryName
            | Error::DuplicateCategoryName(_) => StatusCode::BAD_REQUEST,
            Error::CategoryNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound | Error::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Error::Store(StoreError::PermissionDenied(_)) => StatusCode::FORBIDDEN,
            Error::InvalidTimezone(_) | Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the client, including a hint on how to fix
    /// problems with the server's storage.
    fn client_message(&self) -> String {
        match self {
            Error::NotFound | Error::Store(StoreError::NotFound) => {
                "The requested resource could not be found".to_owned()
            }
            Error::InvalidTimezone(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            Error::Store(StoreError::Unavailable(_)) => "The expense database is not available. \
                Check that the database file exists, is initialised and is not used by another program."
                .to_owned(),
            Error::Store(StoreError::PermissionDenied(_)) => "Permission denied. \
                Check that the server is allowed to write to the expense database."
                .to_owned(),
            Error::Store(StoreError::Unknown(_)) => {
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            Error::Store(StoreError::NotFound) | Error::NotFound => {}
            Error::Store(error) => tracing::error!("A store error occurred: {error}"),
            Error::InvalidTimezone(_) => tracing::error!("{self}"),
            // Client errors are expected and are not faults of the server.
            error => tracing::debug!("Rejected request: {error}"),
        }

        let body = ErrorBody {
            error: self.client_message(),
            details: cfg!(debug_assertions).then(|| self.to_string()),
        };

        (status_code, Json(body)).into_response()
    }
}
