use crate::server::{
    error::{auth::AuthError, AppError},
    model::discord::{PartialGuild, SessionToken},
    service::{authorization::compute_admin_guilds, discord::DiscordApi},
};

/// Service resolving which guilds a visitor may manage.
///
/// Fetches the visitor's and the bot's guild lists live from Discord on every call
/// and applies `compute_admin_guilds`. Nothing is cached here; the caller stores the
/// resulting IDs in the session.
pub struct AdminGuildService<'a> {
    discord: &'a dyn DiscordApi,
}

impl<'a> AdminGuildService<'a> {
    /// Creates a new AdminGuildService instance.
    ///
    /// # Arguments
    /// - `discord` - Discord API implementation
    ///
    /// # Returns
    /// - `AdminGuildService` - New service instance
    pub fn new(discord: &'a dyn DiscordApi) -> Self {
        Self { discord }
    }

    /// Guilds the visitor administers that also have the bot installed.
    ///
    /// # Arguments
    /// - `token` - The visitor's OAuth token
    ///
    /// # Returns
    /// - `Ok(Vec<PartialGuild>)` - Administrator guilds, in the visitor's guild order
    /// - `Err(AppError::AuthErr(TokenRejected))` - Discord refused the visitor's token
    /// - `Err(AppError::UpstreamErr)` - Any other failure of either guild list call
    pub async fn admin_guilds(&self, token: &SessionToken) -> Result<Vec<PartialGuild>, AppError> {
        let user_guilds = self
            .discord
            .list_user_guilds(&token.token_type, &token.access_token)
            .await
            .map_err(|e| {
                if e.is_unauthorized() {
                    tracing::warn!("Discord rejected a session token: {}", e);
                    AppError::from(AuthError::TokenRejected)
                } else {
                    AppError::from(e)
                }
            })?;

        let bot_guilds = self.discord.list_bot_guilds().await?;

        let admin_guilds = compute_admin_guilds(user_guilds, &bot_guilds);

        tracing::debug!(
            "Visitor administers {} of the bot's {} guilds",
            admin_guilds.len(),
            bot_guilds.len()
        );

        Ok(admin_guilds)
    }
}
