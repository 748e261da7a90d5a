use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::server::{
    controller::found,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `code` - Authorization code used to exchange for access tokens
/// - `error` - Set by Discord instead of `code` when the visitor declined
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

pub async fn login(State(state): State<AppState>) -> Response {
    found(state.discord.authorize_url().as_str())
}

pub async fn callback(
    State(state): State<AppState>,
    session: AuthSession,
    params: Query<CallbackParams>,
) -> Result<Response, AppError> {
    let Query(CallbackParams { code, error }) = params;

    let Some(code) = code else {
        let reason = error.unwrap_or_else(|| "missing authorization code".to_string());
        return Err(AuthError::OAuthExchange(reason).into());
    };

    let token = state.discord.exchange_code(code).await.inspect_err(|e| {
        tracing::debug!("OAuth token exchange failed: {}", e);
    })?;

    let session = session.set_token(&token)?;

    tracing::debug!("Visitor logged in with scopes {:?}", token.scope);

    Ok((session, found("/dashboard")).into_response())
}

pub async fn logout(session: AuthSession) -> Response {
    (session.clear(), found("/")).into_response()
}
