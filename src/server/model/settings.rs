use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Command prefix used by guilds that never changed it.
pub const DEFAULT_PREFIX: &str = "!";

/// Settings the companion bot reads for one guild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuildSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub log_channel: Option<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            log_channel: None,
        }
    }
}

/// Contents of the settings store: guild ID to its settings.
///
/// A guild without an entry has the default settings.
pub type GuildConfigMap = BTreeMap<String, GuildSettings>;

/// Parameters for replacing a guild's settings.
///
/// Submitted text is stored exactly as entered. Only a missing or empty value is
/// replaced: the prefix falls back to the default and the log channel is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuildSettingsParam {
    pub guild_id: String,
    pub prefix: Option<String>,
    pub log_channel: Option<String>,
}

impl UpdateGuildSettingsParam {
    /// The settings record this update stores.
    pub fn into_settings(self) -> GuildSettings {
        let prefix = self
            .prefix
            .filter(|p| !p.is_empty())
            .unwrap_or_else(default_prefix);
        let log_channel = self.log_channel.filter(|c| !c.is_empty());

        GuildSettings {
            prefix,
            log_channel,
        }
    }
}
