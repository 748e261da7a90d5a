//! HTTP request handlers.
//!
//! Handlers translate routes into calls on the session, services and views, and
//! enforce authorization before any mutation.

pub mod auth;
pub mod dashboard;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to `location`.
///
/// axum's `Redirect` only offers 303, 307 and 308.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

#[cfg(test)]
mod test;
