use axum_extra::extract::cookie::Key;
use oauth2::{basic::BasicClient, AuthType, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::server::{
    config::Config,
    data::JsonConfigStore,
    error::{config::ConfigError, discord::UpstreamError, AppError},
    state::OAuth2Client,
};

/// Opens the guild settings file, creating an empty one on first run.
///
/// # Arguments
/// - `config` - Application configuration containing the settings file path
///
/// # Returns
/// - `Ok(JsonConfigStore)` - Store ready for use
/// - `Err(AppError::StoreErr)` - File could not be checked or created
pub async fn open_config_store(config: &Config) -> Result<JsonConfigStore, AppError> {
    let store = JsonConfigStore::open(&config.guild_config_path).await?;

    tracing::info!("Using guild config file {}", store.path().display());

    Ok(store)
}

/// Builds the HTTP client used for all Discord requests.
///
/// Redirects are disabled, as recommended for OAuth2 token requests.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(UpstreamError::from)?;

    Ok(client)
}

/// Builds the OAuth2 client for the Discord token endpoint.
///
/// Client credentials are sent in the form body alongside the code, which is how
/// Discord documents the exchange.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with token endpoint and redirect URI set
/// - `Err(AppError::ConfigErr)` - API base or redirect URI is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let token_url = TokenUrl::new(format!("{}/oauth2/token", config.discord_api_url)).map_err(
        |e| ConfigError::InvalidValue {
            name: "DISCORD_API_URL".to_string(),
            reason: e.to_string(),
        },
    )?;
    let redirect_url =
        RedirectUrl::new(config.redirect_uri.clone()).map_err(|e| ConfigError::InvalidValue {
            name: "REDIRECT_URI".to_string(),
            reason: e.to_string(),
        })?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url)
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}

/// Key signing the session cookies.
///
/// Derived from `SESSION_SECRET` when configured, so sessions survive restarts and
/// are shared between processes; otherwise generated randomly, which logs every
/// visitor out whenever the process restarts.
pub fn session_key(config: &Config) -> Result<Key, AppError> {
    match &config.session_secret {
        Some(secret) => Key::try_from(secret.as_slice()).map_err(|e| {
            ConfigError::InvalidValue {
                name: "SESSION_SECRET".to_string(),
                reason: e.to_string(),
            }
            .into()
        }),
        None => {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}
