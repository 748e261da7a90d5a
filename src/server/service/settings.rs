use crate::server::{
    data::ConfigStore,
    error::AppError,
    model::settings::{GuildSettings, UpdateGuildSettingsParam},
};

/// Service for reading and replacing per-guild settings.
///
/// Authorization is the caller's responsibility; this service writes whatever it is
/// asked to.
pub struct GuildSettingsService<'a> {
    store: &'a dyn ConfigStore,
}

impl<'a> GuildSettingsService<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self { store }
    }

    /// Current settings for a guild, defaults if it has none stored.
    pub async fn get(&self, guild_id: &str) -> Result<GuildSettings, AppError> {
        Ok(self.store.get(guild_id).await?)
    }

    /// Replaces a guild's settings and saves the whole mapping.
    ///
    /// # Arguments
    /// - `param` - Guild ID and submitted values
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The settings now stored for the guild
    /// - `Err(AppError::StoreErr)` - The store could not be loaded or saved
    pub async fn update(&self, param: UpdateGuildSettingsParam) -> Result<GuildSettings, AppError> {
        let mut config = self.store.load().await?;

        let guild_id = param.guild_id.clone();
        let settings = param.into_settings();
        config.insert(guild_id.clone(), settings.clone());

        self.store.save(&config).await?;

        tracing::info!(
            "Updated settings for guild {}: prefix {:?}, log channel {:?}",
            guild_id,
            settings.prefix,
            settings.log_channel
        );

        Ok(settings)
    }
}
