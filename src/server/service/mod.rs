//! Business logic between the controllers and the data layer.
//!
//! - `discord` - Outbound Discord API calls behind the `DiscordApi` trait
//! - `authorization` - Derivation of the administrator guild set
//! - `admin_guild` - Fetches live guild lists and applies the authorization rules
//! - `settings` - Reading and replacing per-guild settings

pub mod admin_guild;
pub mod authorization;
pub mod discord;
pub mod settings;

pub use admin_guild::AdminGuildService;
pub use discord::{DiscordApi, DiscordClient};
pub use settings::GuildSettingsService;

#[cfg(test)]
mod test;
