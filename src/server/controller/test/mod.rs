//! Handler tests driven through the full router.
//!
//! `TestApp` carries the signed session cookies from one response to the next
//! request the way a browser would. Discord is replaced by `StubDiscord`, and
//! settings live in a temporary JSON file.


use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use axum_extra::extract::cookie::Key;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    data::JsonConfigStore,
    error::{auth::AuthError, discord::UpstreamError, AppError},
    model::discord::{PartialGuild, SessionToken},
    router,
    service::{discord::build_authorize_url, DiscordApi},
    state::AppState,
};

const AUTHORIZE_BASE: &str = "https://discord.test/api";

/// Canned Discord responses.
pub struct StubDiscord {
    /// Token handed out for any code; `Err` carries the raw provider response.
    pub exchange: Result<SessionToken, String>,
    /// User guild list; `Err` carries the status Discord answers with.
    pub user_guilds: Result<Vec<PartialGuild>, StatusCode>,
    /// Bot guild list; `Err` carries the status Discord answers with.
    pub bot_guilds: Result<Vec<PartialGuild>, StatusCode>,
}

impl StubDiscord {
    pub fn new() -> Self {
        Self {
            exchange: Ok(token()),
            user_guilds: Ok(Vec::new()),
            bot_guilds: Ok(Vec::new()),
        }
    }

    pub fn with_user_guilds(mut self, guilds: Vec<Value>) -> Self {
        self.user_guilds = Ok(parse_guilds(guilds));
        self
    }

    pub fn with_bot_guilds(mut self, guilds: Vec<Value>) -> Self {
        self.bot_guilds = Ok(parse_guilds(guilds));
        self
    }

    pub fn failing_bot_guilds(mut self) -> Self {
        self.bot_guilds = Err(StatusCode::SERVICE_UNAVAILABLE);
        self
    }

    pub fn rejecting_user_token(mut self) -> Self {
        self.user_guilds = Err(StatusCode::UNAUTHORIZED);
        self
    }

    pub fn failing_exchange(mut self, response: &str) -> Self {
        self.exchange = Err(response.to_string());
        self
    }
}

#[async_trait]
impl DiscordApi for StubDiscord {
    fn authorize_url(&self) -> Url {
        build_authorize_url(AUTHORIZE_BASE, "1234", "http://localhost:5000/callback").unwrap()
    }

    async fn exchange_code(&self, _code: String) -> Result<SessionToken, AppError> {
        self.exchange
            .clone()
            .map_err(|raw| AuthError::OAuthExchange(raw).into())
    }

    async fn list_user_guilds(
        &self,
        _token_type: &str,
        _access_token: &str,
    ) -> Result<Vec<PartialGuild>, UpstreamError> {
        self.user_guilds.clone().map_err(status_error)
    }

    async fn list_bot_guilds(&self) -> Result<Vec<PartialGuild>, UpstreamError> {
        self.bot_guilds.clone().map_err(status_error)
    }
}

pub fn token() -> SessionToken {
    SessionToken {
        access_token: "user-access-token".to_string(),
        token_type: "Bearer".to_string(),
        scope: Some("identify guilds".to_string()),
        expires_in: Some(604800),
        refresh_token: Some("user-refresh-token".to_string()),
    }
}

fn status_error(status: StatusCode) -> UpstreamError {
    UpstreamError::Status {
        status,
        body: String::new(),
    }
}

fn parse_guilds(guilds: Vec<Value>) -> Vec<PartialGuild> {
    guilds
        .into_iter()
        .map(|guild| serde_json::from_value(guild).unwrap())
        .collect()
}

/// Response status, `Location` header and body text.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Router plus the cookies a browser would be holding.
pub struct TestApp {
    router: Router,
    store: Arc<JsonConfigStore>,
    session_key: Key,
    cookies: BTreeMap<String, String>,
}

impl TestApp {
    pub fn new(discord: StubDiscord, store: Arc<JsonConfigStore>) -> Self {
        Self::with_key(discord, store, Key::generate())
    }

    fn with_key(discord: StubDiscord, store: Arc<JsonConfigStore>, session_key: Key) -> Self {
        let state = AppState::new(Arc::new(discord), store.clone(), session_key.clone(), false);

        Self {
            router: router::app(state),
            store,
            session_key,
            cookies: BTreeMap::new(),
        }
    }

    /// A freshly started server sharing this one's key, visited by the same browser.
    pub fn restart(&self, discord: StubDiscord) -> Self {
        let mut app = Self::with_key(discord, self.store.clone(), self.session_key.clone());
        app.cookies = self.cookies.clone();
        app
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form.to_string())).await
    }

    /// POST without content type or body.
    pub async fn post_empty(&mut self, uri: &str) -> TestResponse {
        self.send(Method::POST, uri, None).await
    }

    /// Logs in through the callback with the stub's token.
    pub async fn login(&mut self) {
        let response = self.get("/callback?code=valid-code").await;
        assert_eq!(response.status, StatusCode::FOUND);
    }

    async fn send(&mut self, method: Method, uri: &str, form: Option<String>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(header::COOKIE, cookie);
        }
        let request = match form {
            Some(form) => request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form)),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap();
            let (name, value) = pair.split_once('=').unwrap();
            if set_cookie.contains("Max-Age=0") {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}
