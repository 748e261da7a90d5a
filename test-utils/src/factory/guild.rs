//! Guild payload factory.
//!
//! Builds entries of the array returned by Discord's `users/@me/guilds` endpoint.
//! Permissions are emitted as a decimal string, matching the live API.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Administrator permission bit.
pub const ADMINISTRATOR: u64 = 0x8;

/// Factory for creating guild payloads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new()
///     .guild_id("987654321")
///     .name("CustomGuild")
///     .permissions(0x8 | 0x1)
///     .build();
/// ```
pub struct GuildFactory {
    guild_id: String,
    name: String,
    icon: Option<String>,
    owner: bool,
    permissions: u64,
}

impl GuildFactory {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - name: `"Guild {id}"`
    /// - icon: `None`
    /// - owner: `false`
    /// - permissions: `0`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            owner: false,
            permissions: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn owner(mut self, owner: bool) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the raw permission bitmask.
    pub fn permissions(mut self, permissions: u64) -> Self {
        self.permissions = permissions;
        self
    }

    /// Builds the guild payload.
    ///
    /// # Returns
    /// - `Value` - JSON object shaped like a Discord partial guild
    pub fn build(self) -> Value {
        json!({
            "id": self.guild_id,
            "name": self.name,
            "icon": self.icon,
            "owner": self.owner,
            "permissions": self.permissions.to_string(),
            "features": [],
        })
    }
}

impl Default for GuildFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a guild payload with default values.
pub fn create_guild() -> Value {
    GuildFactory::new().build()
}

/// Creates a guild payload where the credential holds the administrator bit.
pub fn create_admin_guild(guild_id: &str, name: &str) -> Value {
    GuildFactory::new()
        .guild_id(guild_id)
        .name(name)
        .permissions(ADMINISTRATOR)
        .build()
}

/// Creates a guild payload where the credential holds no permissions.
pub fn create_member_guild(guild_id: &str, name: &str) -> Value {
    GuildFactory::new()
        .guild_id(guild_id)
        .name(name)
        .permissions(0)
        .build()
}
