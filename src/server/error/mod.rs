//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so handlers can simply propagate failures with `?`.
//!
//! Only authentication and authorization failures are recovered deliberately
//! (400, 403 or a redirect to login). Everything else is logged and answered with a
//! generic 500.

pub mod auth;
pub mod config;
pub mod discord;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, discord::UpstreamError, store::StoreError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while the remaining
/// variants all become 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400 Bad Request, 403 Forbidden, redirect to login).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Guild settings store could not be read, parsed or written.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Discord API request failed or returned a non-success status.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// A session cookie value could not be encoded.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error("Failed to encode session cookie: {0}")]
    SessionErr(#[source] serde_json::Error),

    /// The request body is not a valid form submission.
    ///
    /// Answered with axum's own rejection status (415 or 422).
    #[error(transparent)]
    FormErr(#[from] axum::extract::rejection::FormRejection),

    /// I/O error outside of the settings store, such as binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 4xx - For `FormErr`, the rejection's own response
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::FormErr(rejection) => rejection.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic plain-text body to the client to avoid
/// leaking implementation details such as file paths or upstream responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
