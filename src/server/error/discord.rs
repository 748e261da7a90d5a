use oauth2::HttpClientError;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures of outbound Discord API calls.
///
/// Nothing here is retried. Callers decide whether a failure is recoverable; in
/// practice only a rejected user token is (the visitor is logged out).
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request could not be sent or the response body could not be decoded.
    #[error("Discord API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The OAuth token request could not be sent.
    #[error("Discord token request failed: {0}")]
    Exchange(#[source] HttpClientError<reqwest::Error>),

    /// Discord answered with a non-success status.
    #[error("Discord API responded with {status}: {body}")]
    Status {
        /// Status code returned by Discord
        status: StatusCode,
        /// Raw response body, for diagnostics
        body: String,
    },
}

impl UpstreamError {
    /// Whether Discord refused the credential used for the request.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: StatusCode::UNAUTHORIZED,
                ..
            }
        )
    }
}
