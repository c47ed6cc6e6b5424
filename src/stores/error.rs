//! The structured error type returned by the store traits.

use rusqlite::ErrorCode;

/// The ways a store operation can fail.
///
/// Store implementations classify their backend's errors into these variants
/// once, so that callers never need to inspect error messages.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The storage backend could not be reached, is not initialised or is
    /// otherwise not usable.
    #[error("the store is not available: {0}")]
    Unavailable(String),

    /// The storage backend refused the operation.
    #[error("permission denied by the store: {0}")]
    PermissionDenied(String),

    /// The record targeted by the operation does not exist.
    #[error("the record could not be found in the store")]
    NotFound,

    /// Any other failure.
    #[error("an unexpected store error occurred: {0}")]
    Unknown(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
            rusqlite::Error::SqliteFailure(ref sql_error, ref description) => {
                let message = description
                    .clone()
                    .unwrap_or_else(|| sql_error.to_string());

                match sql_error.code {
                    ErrorCode::CannotOpen
                    | ErrorCode::NotADatabase
                    | ErrorCode::DatabaseCorrupt
                    | ErrorCode::DatabaseBusy
                    | ErrorCode::DatabaseLocked
                    | ErrorCode::SystemIoFailure
                    | ErrorCode::DiskFull => StoreError::Unavailable(message),
                    ErrorCode::ReadOnly
                    | ErrorCode::PermissionDenied
                    | ErrorCode::AuthorizationForStatementDenied => {
                        StoreError::PermissionDenied(message)
                    }
                    // SQLite reports a missing table with the generic error code.
                    _ if message.starts_with("no such table") => StoreError::Unavailable(message),
                    _ => StoreError::Unknown(message),
                }
            }
            error => StoreError::Unknown(error.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(value: std::sync::PoisonError<T>) -> Self {
        tracing::error!("could not acquire database lock: {value}");
        StoreError::Unavailable("could not acquire the database lock".to_owned())
    }
}
