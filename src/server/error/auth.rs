use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::controller::found;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The OAuth token exchange did not yield an access token.
    ///
    /// Carries the raw provider response (or the reason no exchange took place) so
    /// the visitor can see why the login failed. Authorization codes are single use,
    /// so the visitor has to restart the login flow. Results in 400 Bad Request.
    #[error("OAuth failed: {0}")]
    OAuthExchange(String),

    /// A settings mutation was attempted for a guild that is not in the session's
    /// cached administrator set.
    ///
    /// Results in 403 Forbidden.
    #[error("Access denied for guild {0}")]
    AccessDenied(String),

    /// The token stored in the session could not be deserialized.
    ///
    /// Results in a redirect to the login page.
    #[error("Session token is malformed")]
    MalformedToken,

    /// Discord rejected the session's access token when listing the user's guilds.
    ///
    /// Results in a redirect to the login page.
    #[error("Discord rejected the session access token")]
    TokenRejected,
}

/// Converts authentication errors into HTTP responses.
///
/// - `OAuthExchange` → 400 Bad Request with `OAuth failed: <raw provider response>`
/// - `AccessDenied` → 403 Forbidden with `Unauthorized`
/// - `MalformedToken` / `TokenRejected` → 302 Found to `/login`
///
/// Bodies are plain text; the dashboard has no structured error page.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::OAuthExchange(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            Self::AccessDenied(guild_id) => {
                tracing::debug!("Rejected settings update for guild {}", guild_id);

                (StatusCode::FORBIDDEN, "Unauthorized").into_response()
            }
            Self::MalformedToken | Self::TokenRejected => found("/login"),
        }
    }
}
