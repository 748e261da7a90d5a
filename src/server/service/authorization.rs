//! Administrator guild derivation.
//!
//! A visitor may manage a guild only when the companion bot is in it, the visitor
//! is in it, and the visitor holds the administrator permission there. The set is
//! computed when the dashboard is viewed and cached in the session; mutation checks
//! only consult that cached id set.

use std::collections::HashSet;

use serenity::all::{GuildId, Permissions};

use crate::server::model::discord::PartialGuild;

/// Guilds from `user_guilds` the visitor administers and the bot has joined.
///
/// The administrator check is a bitmask test, so additional permission bits do not
/// matter. Order follows `user_guilds`.
///
/// # Arguments
/// - `user_guilds` - Guilds the visitor belongs to, with the visitor's permissions
/// - `bot_guilds` - Guilds the bot belongs to; only their IDs are used
///
/// # Returns
/// - `Vec<PartialGuild>` - Guilds satisfying all three conditions
pub fn compute_admin_guilds(
    user_guilds: Vec<PartialGuild>,
    bot_guilds: &[PartialGuild],
) -> Vec<PartialGuild> {
    let bot_guild_ids: HashSet<GuildId> = bot_guilds.iter().map(|g| g.id).collect();

    user_guilds
        .into_iter()
        .filter(|g| {
            bot_guild_ids.contains(&g.id) && g.permissions.contains(Permissions::ADMINISTRATOR)
        })
        .collect()
}

/// Whether `guild_id` is in the cached administrator set.
pub fn is_authorized(guild_id: &str, admin_guild_ids: &HashSet<String>) -> bool {
    admin_guild_ids.contains(guild_id)
}
