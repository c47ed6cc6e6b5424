//! The fallback response for paths that do not match a route.

use axum::response::{IntoResponse, Response};

use crate::Error;

/// Respond with a 404 JSON error.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
