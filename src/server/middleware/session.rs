//! Type-safe session management wrapper.
//!
//! The visitor's session is addressed through `AuthSession` rather than raw cookie
//! names, so every handler reads and writes the same typed values. All session
//! state travels in signed cookies: the server keeps no session table, and any
//! process holding the same key accepts the cookies.

use std::{collections::HashSet, convert::Infallible};

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use time::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::discord::SessionToken,
    state::AppState,
};

// Cookie name constants
const SESSION_AUTH_TOKEN: &str = "auth_token";
const SESSION_AUTH_ADMIN_GUILD_IDS: &str = "auth_admin_guild_ids";

/// Lifetime of session cookies, renewed whenever they are written.
const SESSION_MAX_AGE_DAYS: i64 = 7;

/// Authentication session management.
///
/// Holds the visitor's OAuth token and the cached set of guild IDs the visitor
/// administers. A session without a token belongs to an anonymous visitor.
///
/// Writes return the updated session, which must be part of the response for the
/// browser to receive the new cookies.
pub struct AuthSession {
    /// Signed cookies presented by the visitor plus pending changes.
    jar: SignedCookieJar,

    /// Whether cookies carry the `Secure` attribute.
    secure: bool,
}

impl AuthSession {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `jar` - Signed cookie jar holding the visitor's cookies
    /// - `secure` - Whether written cookies require HTTPS
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(jar: SignedCookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// Stores the visitor's OAuth token, marking the session as authenticated.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Session carrying the token cookie
    /// - `Err(AppError::SessionErr(_))` - Token could not be encoded
    pub fn set_token(self, token: &SessionToken) -> Result<Self, AppError> {
        let value = serde_json::to_string(token).map_err(AppError::SessionErr)?;

        Ok(self.insert(SESSION_AUTH_TOKEN, value))
    }

    /// Retrieves the visitor's OAuth token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Visitor is logged in
    /// - `Ok(None)` - No validly signed token cookie (anonymous visitor)
    /// - `Err(AppError::AuthErr(MalformedToken))` - A value is stored but is not a token
    pub fn get_token(&self) -> Result<Option<SessionToken>, AppError> {
        let Some(cookie) = self.jar.get(SESSION_AUTH_TOKEN) else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionToken>(cookie.value()) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                tracing::warn!("Discarding malformed session token: {}", e);
                Err(AuthError::MalformedToken.into())
            }
        }
    }

    /// Checks whether a token is present, without validating its shape.
    pub fn is_authenticated(&self) -> bool {
        self.jar.get(SESSION_AUTH_TOKEN).is_some()
    }

    /// Caches the IDs of the guilds the visitor administers.
    ///
    /// Replaces any previously cached set.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Session carrying the new set
    /// - `Err(AppError::SessionErr(_))` - Set could not be encoded
    pub fn set_admin_guild_ids(self, guild_ids: &HashSet<String>) -> Result<Self, AppError> {
        let value = serde_json::to_string(guild_ids).map_err(AppError::SessionErr)?;

        Ok(self.insert(SESSION_AUTH_ADMIN_GUILD_IDS, value))
    }

    /// Retrieves the cached administrator guild IDs.
    ///
    /// An absent cookie, or one that does not hold a set of IDs, counts as an
    /// empty set: the visitor administers nothing until the dashboard is viewed.
    pub fn get_admin_guild_ids(&self) -> HashSet<String> {
        self.jar
            .get(SESSION_AUTH_ADMIN_GUILD_IDS)
            .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
            .unwrap_or_default()
    }

    /// Clears all data from the session.
    ///
    /// Used during logout and when the stored token turns out to be unusable.
    pub fn clear(self) -> Self {
        let jar = [SESSION_AUTH_TOKEN, SESSION_AUTH_ADMIN_GUILD_IDS]
            .into_iter()
            .fold(self.jar, |jar, name| {
                jar.remove(Cookie::build(name).path("/"))
            });

        Self { jar, ..self }
    }

    fn insert(self, name: &'static str, value: String) -> Self {
        let cookie = Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::days(SESSION_MAX_AGE_DAYS));

        Self {
            jar: self.jar.add(cookie),
            ..self
        }
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.session_key.clone());

        Ok(Self::new(jar, state.secure_cookies))
    }
}

impl IntoResponseParts for AuthSession {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header, HeaderMap, HeaderValue, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::cookie::Key;
    use test_utils::context::TestContext;

    use super::*;

    fn token() -> SessionToken {
        SessionToken {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            scope: Some("identify guilds".to_string()),
            expires_in: Some(604800),
            refresh_token: Some("def".to_string()),
        }
    }

    /// Set-Cookie header values the session would send.
    fn set_cookies(session: AuthSession) -> Vec<String> {
        let response = (session, StatusCode::OK).into_response();

        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect()
    }

    /// Sends the session's cookies back as the browser would on its next request.
    fn next_request(session: AuthSession, key: Key) -> AuthSession {
        let cookies: Vec<String> = set_cookies(session)
            .iter()
            .filter(|cookie| !cookie.contains("Max-Age=0"))
            .filter_map(|cookie| cookie.split(';').next().map(str::to_string))
            .collect();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&cookies.join("; ")).unwrap(),
        );

        AuthSession::new(SignedCookieJar::from_headers(&headers, key), false)
    }

    /// Tests that a fresh session is anonymous.
    ///
    /// Expected: No token, not authenticated, empty admin set
    #[test]
    fn fresh_session_is_anonymous() -> Result<(), AppError> {
        let test = TestContext::new().unwrap();
        let auth_session = AuthSession::new(test.session_jar(), false);

        assert_eq!(auth_session.get_token()?, None);
        assert!(!auth_session.is_authenticated());
        assert!(auth_session.get_admin_guild_ids().is_empty());

        Ok(())
    }

    /// Tests that the token and admin set survive the trip through the browser.
    ///
    /// Expected: Same token and IDs read from the returned cookies
    #[test]
    fn stores_token_and_admin_guild_ids() -> Result<(), AppError> {
        let test = TestContext::new().unwrap();
        let ids: HashSet<String> = ["1".to_string(), "2".to_string()].into_iter().collect();

        let auth_session = AuthSession::new(test.session_jar(), false)
            .set_token(&token())?
            .set_admin_guild_ids(&ids)?;

        let auth_session = next_request(auth_session, test.session_key());

        assert_eq!(auth_session.get_token()?, Some(token()));
        assert!(auth_session.is_authenticated());
        assert_eq!(auth_session.get_admin_guild_ids(), ids);

        Ok(())
    }

    /// Tests that cookies signed with another key are ignored.
    ///
    /// Expected: Anonymous session
    #[test]
    fn ignores_cookies_signed_with_other_key() -> Result<(), AppError> {
        let test = TestContext::new().unwrap();
        let auth_session = AuthSession::new(test.session_jar(), false).set_token(&token())?;

        let auth_session = next_request(auth_session, Key::generate());

        assert!(!auth_session.is_authenticated());
        assert_eq!(auth_session.get_token()?, None);

        Ok(())
    }

    /// Tests that clearing the session logs the visitor out.
    ///
    /// Expected: Token and admin set gone, removal cookies sent
    #[test]
    fn clear_removes_everything() -> Result<(), AppError> {
        let test = TestContext::new().unwrap();
        let auth_session = AuthSession::new(test.session_jar(), false)
            .set_token(&token())?
            .set_admin_guild_ids(&["1".to_string()].into_iter().collect())?;
        let auth_session = next_request(auth_session, test.session_key());

        let auth_session = auth_session.clear();

        assert_eq!(auth_session.get_token()?, None);
        assert!(auth_session.get_admin_guild_ids().is_empty());

        let cookies = set_cookies(auth_session);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|cookie| cookie.contains("Max-Age=0")));

        Ok(())
    }

    /// Tests the attributes of written cookies.
    ///
    /// Expected: HttpOnly, SameSite=Lax, Path=/, 7 day Max-Age, Secure when enabled
    #[test]
    fn cookies_are_http_only_and_lax() -> Result<(), AppError> {
        let test = TestContext::new().unwrap();

        let cookies = set_cookies(AuthSession::new(test.session_jar(), true).set_token(&token())?);

        assert_eq!(cookies.len(), 1);
        let cookie = &cookies[0];
        assert!(cookie.starts_with("auth_token="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Max-Age=604800"));

        Ok(())
    }

    /// Tests that a signed value missing token fields is reported as malformed.
    ///
    /// Expected: Err(AuthError::MalformedToken) while still counted as authenticated
    #[test]
    fn malformed_token_is_reported() {
        let test = TestContext::new().unwrap();
        let jar = test.session_jar().add(Cookie::new(
            SESSION_AUTH_TOKEN,
            r#"{"error": "invalid_grant"}"#,
        ));

        let auth_session = AuthSession::new(jar, false);

        assert!(auth_session.is_authenticated());
        assert!(matches!(
            auth_session.get_token(),
            Err(AppError::AuthErr(AuthError::MalformedToken))
        ));
    }
}
