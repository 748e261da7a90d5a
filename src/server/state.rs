//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Discord API access (OAuth code exchange and guild listing)
//! - The guild settings store
//! - The key signing session cookies

use axum_extra::extract::cookie::Key;
use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::{data::ConfigStore, service::DiscordApi};

/// Type alias for the OAuth2 client configured for Discord authentication.
///
/// Only the token endpoint is set; the consent URL is built without the oauth2
/// crate because it carries no `state` parameter.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// The capabilities are trait objects behind `Arc`, so cloning is cheap and tests
/// can inject stubs or temporary stores.
#[derive(Clone)]
pub struct AppState {
    /// Discord API access.
    ///
    /// `DiscordClient` in production; a stub in handler tests.
    pub discord: Arc<dyn DiscordApi>,

    /// Guild settings store.
    ///
    /// Shared by every request without locking; concurrent updates race and the
    /// last save wins.
    pub config_store: Arc<dyn ConfigStore>,

    /// Key signing and verifying session cookies.
    ///
    /// Every process configured with the same key accepts the same sessions.
    pub session_key: Key,

    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `discord` - Discord API implementation
    /// - `config_store` - Guild settings store
    /// - `session_key` - Key signing session cookies
    /// - `secure_cookies` - Whether session cookies require HTTPS
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        config_store: Arc<dyn ConfigStore>,
        session_key: Key,
        secure_cookies: bool,
    ) -> Self {
        Self {
            discord,
            config_store,
            session_key,
            secure_cookies,
        }
    }
}
