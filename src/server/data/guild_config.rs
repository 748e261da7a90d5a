use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::server::{
    error::store::StoreError,
    model::settings::{GuildConfigMap, GuildSettings},
};

/// Storage for per-guild settings.
///
/// Implementations persist the whole mapping on every `save`; there are no partial
/// updates and no versioning. Nothing coordinates concurrent writers: two requests
/// that load, modify and save at the same time race, and the last save wins.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Loads the complete guild settings mapping.
    ///
    /// # Returns
    /// - `Ok(GuildConfigMap)` - Current mapping, empty if nothing was saved yet
    /// - `Err(StoreError::Io)` - Backing storage could not be read
    /// - `Err(StoreError::Corrupt)` - Stored content is not a valid mapping
    async fn load(&self) -> Result<GuildConfigMap, StoreError>;

    /// Replaces the stored mapping with `config`.
    ///
    /// # Returns
    /// - `Ok(())` - Mapping written
    /// - `Err(StoreError)` - Mapping could not be serialized or written
    async fn save(&self, config: &GuildConfigMap) -> Result<(), StoreError>;

    /// Settings for one guild, or the defaults when the guild has no entry.
    async fn get(&self, guild_id: &str) -> Result<GuildSettings, StoreError> {
        let mut config = self.load().await?;

        Ok(config.remove(guild_id).unwrap_or_default())
    }
}

/// `ConfigStore` backed by a pretty-printed JSON file.
///
/// The file holds a single object mapping guild ID strings to
/// `{"prefix": ..., "log_channel": ...}` records.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Opens the settings file at `path`, creating it with an empty mapping if it
    /// does not exist yet.
    ///
    /// Existing content is left untouched and only validated on the next `load`.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON settings file
    ///
    /// # Returns
    /// - `Ok(JsonConfigStore)` - Store ready for use
    /// - `Err(StoreError::Io)` - File could not be checked or created
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };

        let exists = tokio::fs::try_exists(&store.path)
            .await
            .map_err(|e| store.io_error(e))?;

        if !exists {
            tracing::info!(
                "Creating empty guild config file at {}",
                store.path.display()
            );
            store.save(&GuildConfigMap::new()).await?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn load(&self) -> Result<GuildConfigMap, StoreError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, config: &GuildConfigMap) -> Result<(), StoreError> {
        let contents = serde_json::to_vec_pretty(config).map_err(StoreError::Serialize)?;

        // Whole-file rewrite, not atomic.
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| self.io_error(e))
    }
}
