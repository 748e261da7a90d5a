use async_trait::async_trait;
use oauth2::{
    basic::{BasicErrorResponse, BasicTokenType},
    AuthorizationCode, EmptyExtraTokenFields, HttpClientError, RequestTokenError,
    StandardTokenResponse, TokenResponse,
};
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::server::{
    config::Config,
    error::{auth::AuthError, config::ConfigError, discord::UpstreamError, AppError},
    model::discord::{PartialGuild, SessionToken},
    state::OAuth2Client,
};

/// Scopes requested from visitors: their identity and their guild list.
pub const OAUTH_SCOPE: &str = "identify guilds";

/// Outbound calls the dashboard makes to Discord.
///
/// Handlers only see this trait so tests can substitute a stub for the live API.
/// No implementation retries, throttles or overrides timeouts.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// URL visitors are redirected to in order to grant the dashboard access.
    fn authorize_url(&self) -> Url;

    /// Exchanges an OAuth2 authorization code for the visitor's token.
    ///
    /// # Returns
    /// - `Ok(SessionToken)` - Discord issued an access token
    /// - `Err(AppError::AuthErr(OAuthExchange))` - Discord answered without an access
    ///   token; carries the raw response
    /// - `Err(AppError::UpstreamErr)` - The token request could not be made
    async fn exchange_code(&self, code: String) -> Result<SessionToken, AppError>;

    /// Guilds the visitor belongs to, with the visitor's permissions in each.
    async fn list_user_guilds(
        &self,
        token_type: &str,
        access_token: &str,
    ) -> Result<Vec<PartialGuild>, UpstreamError>;

    /// Guilds the companion bot has been added to.
    async fn list_bot_guilds(&self) -> Result<Vec<PartialGuild>, UpstreamError>;
}

/// Builds the Discord OAuth2 consent URL.
///
/// No `state` parameter is attached; the callback accepts any code.
///
/// # Arguments
/// - `api_url` - Discord API base, e.g. `https://discord.com/api`
/// - `client_id` - Application client ID
/// - `redirect_uri` - Callback URL registered with the application
///
/// # Returns
/// - `Ok(Url)` - Authorization URL with `client_id`, `redirect_uri`,
///   `response_type=code` and `scope`
/// - `Err(url::ParseError)` - `api_url` is not a valid URL
pub fn build_authorize_url(
    api_url: &str,
    client_id: &str,
    redirect_uri: &str,
) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &format!("{}/oauth2/authorize", api_url),
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", OAUTH_SCOPE),
        ],
    )
}

/// `DiscordApi` implementation talking to the live Discord API.
pub struct DiscordClient {
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
    api_url: String,
    authorize_url: Url,
    bot_token: String,
}

impl DiscordClient {
    /// Creates a new DiscordClient.
    ///
    /// # Arguments
    /// - `config` - Application configuration (API base, client ID, redirect URI, bot token)
    /// - `http_client` - HTTP client for Discord API requests
    /// - `oauth_client` - OAuth2 client configured with the token endpoint
    ///
    /// # Returns
    /// - `Ok(DiscordClient)` - Client ready for use
    /// - `Err(AppError::ConfigErr)` - The configured API base is not a valid URL
    pub fn new(
        config: &Config,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
    ) -> Result<Self, AppError> {
        let authorize_url = build_authorize_url(
            &config.discord_api_url,
            &config.discord_client_id,
            &config.redirect_uri,
        )
        .map_err(|e| ConfigError::InvalidValue {
            name: "DISCORD_API_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http_client,
            oauth_client,
            api_url: config.discord_api_url.clone(),
            authorize_url,
            bot_token: config.discord_bot_token.clone(),
        })
    }

    /// Calls `users/@me/guilds` with the given `Authorization` header value.
    async fn fetch_guilds(&self, authorization: String) -> Result<Vec<PartialGuild>, UpstreamError> {
        let response = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.api_url))
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        Ok(response.json::<Vec<PartialGuild>>().await?)
    }
}

#[async_trait]
impl DiscordApi for DiscordClient {
    fn authorize_url(&self) -> Url {
        self.authorize_url.clone()
    }

    async fn exchange_code(&self, code: String) -> Result<SessionToken, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .add_extra_param("scope", OAUTH_SCOPE)
            .request_async(&self.http_client)
            .await
            .map_err(token_request_error)?;

        Ok(session_token(&token))
    }

    async fn list_user_guilds(
        &self,
        token_type: &str,
        access_token: &str,
    ) -> Result<Vec<PartialGuild>, UpstreamError> {
        self.fetch_guilds(format!("{} {}", token_type, access_token))
            .await
    }

    async fn list_bot_guilds(&self) -> Result<Vec<PartialGuild>, UpstreamError> {
        self.fetch_guilds(format!("Bot {}", self.bot_token)).await
    }
}

/// Maps a failed token exchange to the application error the visitor sees.
///
/// Anything Discord actually answered is surfaced verbatim as an OAuth failure;
/// only transport problems become upstream errors.
fn token_request_error(
    err: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>,
) -> AppError {
    match err {
        RequestTokenError::ServerResponse(response) => {
            let raw = serde_json::to_string(&response).unwrap_or_else(|_| response.to_string());
            AuthError::OAuthExchange(raw).into()
        }
        RequestTokenError::Parse(_, body) => {
            AuthError::OAuthExchange(String::from_utf8_lossy(&body).into_owned()).into()
        }
        RequestTokenError::Request(e) => UpstreamError::Exchange(e).into(),
        RequestTokenError::Other(msg) => AuthError::OAuthExchange(msg).into(),
    }
}

fn session_token(token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>) -> SessionToken {
    // Discord spells the scheme "Bearer"; the oauth2 crate normalizes to lowercase.
    let token_type = match token.token_type() {
        BasicTokenType::Bearer => "Bearer".to_string(),
        other => other.as_ref().to_string(),
    };

    SessionToken {
        access_token: token.access_token().secret().clone(),
        token_type,
        scope: token.scopes().map(|scopes| {
            scopes
                .iter()
                .map(|scope| scope.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        }),
        expires_in: token.expires_in().map(|d| d.as_secs()),
        refresh_token: token.refresh_token().map(|t| t.secret().clone()),
    }
}
