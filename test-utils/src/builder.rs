use serde_json::{Map, Value};

use crate::{context::TestContext, error::TestError};

/// Seed for the guild settings file.
enum ConfigSeed {
    /// Leave the file absent so the store has to create it.
    Absent,
    /// Write the given guild entries as a JSON object.
    Entries(Map<String, Value>),
    /// Write arbitrary text, typically to simulate a corrupt file.
    Raw(String),
}

/// Builder for creating test contexts with a seeded guild settings file.
///
/// Each built context gets its own temporary directory, so tests never share
/// settings.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_guild_config("1", json!({"prefix": "$", "log_channel": "42"}))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    config: ConfigSeed,
}

impl TestBuilder {
    /// Creates a new test builder whose settings file does not exist yet.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            config: ConfigSeed::Absent,
        }
    }

    /// Adds a guild entry to the seeded settings file.
    ///
    /// Calling this at least once makes `build()` write the file. Chain multiple
    /// calls to seed several guilds.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID used as the object key
    /// - `settings` - Settings record, e.g. `{"prefix": "?", "log_channel": null}`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_guild_config(mut self, guild_id: impl Into<String>, settings: Value) -> Self {
        let mut entries = match self.config {
            ConfigSeed::Entries(entries) => entries,
            _ => Map::new(),
        };
        entries.insert(guild_id.into(), settings);
        self.config = ConfigSeed::Entries(entries);
        self
    }

    /// Writes an empty mapping (`{}`) as the settings file.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_empty_config(mut self) -> Self {
        self.config = ConfigSeed::Entries(Map::new());
        self
    }

    /// Writes `contents` verbatim as the settings file.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, need not be valid JSON
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_config(mut self, contents: impl Into<String>) -> Self {
        self.config = ConfigSeed::Raw(contents.into());
        self
    }

    /// Builds the test context, writing the seeded settings file if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning a unique settings file path
    /// - `Err(TestError::Io)` - Failed to create the directory or write the seeded file
    /// - `Err(TestError::Json)` - Failed to serialize the seeded entries
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.config {
            ConfigSeed::Absent => {}
            ConfigSeed::Entries(entries) => {
                let contents = serde_json::to_vec_pretty(&Value::Object(entries))?;
                std::fs::write(context.config_path(), contents)?;
            }
            ConfigSeed::Raw(contents) => {
                std::fs::write(context.config_path(), contents)?;
            }
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
