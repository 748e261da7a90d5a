use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";
const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api";
const DEFAULT_GUILD_CONFIG_PATH: &str = "guild_config.json";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Minimum length of `SESSION_SECRET`, dictated by the cookie signing key.
const SESSION_SECRET_MIN_LEN: usize = 64;

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_bot_token: String,
    pub redirect_uri: String,

    pub discord_api_url: String,
    pub guild_config_path: PathBuf,
    pub bind_address: String,

    /// Secret used to sign session cookies. A random key is generated at startup
    /// when unset, which invalidates every session on restart.
    pub session_secret: Option<Vec<u8>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is missing
    /// - `Err(AppError::ConfigErr(InvalidValue))` - `SESSION_SECRET` is too short
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) if secret.len() < SESSION_SECRET_MIN_LEN => {
                return Err(ConfigError::InvalidValue {
                    name: "SESSION_SECRET".to_string(),
                    reason: format!("must be at least {} bytes", SESSION_SECRET_MIN_LEN),
                }
                .into());
            }
            secret => secret.map(String::into_bytes),
        };

        Ok(Self {
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_bot_token: required("DISCORD_TOKEN")?,
            redirect_uri: optional("REDIRECT_URI", DEFAULT_REDIRECT_URI),
            discord_api_url: optional("DISCORD_API_URL", DEFAULT_DISCORD_API_URL)
                .trim_end_matches('/')
                .to_string(),
            guild_config_path: PathBuf::from(optional(
                "GUILD_CONFIG_PATH",
                DEFAULT_GUILD_CONFIG_PATH,
            )),
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            session_secret,
        })
    }

    /// Whether session cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.redirect_uri.starts_with("https://")
    }
}
