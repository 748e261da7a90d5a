use serde::{Deserialize, Serialize};
use serenity::all::{GuildId, Permissions};

/// Partial guild information returned from Discord's `users/@me/guilds` endpoint.
///
/// The same shape is returned for user and bot credentials, so it is used for both
/// lists. Only the fields the dashboard needs are kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PartialGuild {
    /// Discord guild ID.
    pub id: GuildId,
    /// Guild display name.
    pub name: String,
    /// Optional guild icon hash for constructing icon URLs.
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the credential's user owns the guild.
    #[serde(default)]
    pub owner: bool,
    /// The credential's permission bitmask in this guild.
    #[serde(default = "Permissions::empty")]
    pub permissions: Permissions,
}

impl PartialGuild {
    /// CDN URL of the guild icon, if the guild has one.
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png",
                self.id.get(),
                hash
            )
        })
    }
}

/// OAuth2 token issued to a visitor by the Discord token endpoint.
///
/// Stored as-is in the visitor's session. Nothing refreshes it; when Discord stops
/// accepting it the visitor is sent back through the login flow.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
}

impl SessionToken {
    /// Value for the `Authorization` header of user-credential requests.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}
