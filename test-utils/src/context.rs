use std::path::{Path, PathBuf};

use axum_extra::extract::cookie::{Key, SignedCookieJar};
use tempfile::TempDir;

/// Test context owning an isolated guild settings file and a session key.
///
/// The settings file lives in its own temporary directory, which is deleted
/// together with the file when the context is dropped.
pub struct TestContext {
    /// Directory holding the settings file; removed on drop.
    _dir: TempDir,

    /// Path of the guild settings file for this test.
    config_path: PathBuf,

    /// Key signing the session cookies of this test.
    session_key: Key,
}

impl TestContext {
    /// Creates a new test context with a unique, not yet existing settings path.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh temporary directory
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, crate::error::TestError> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("guild_config.json");

        Ok(Self {
            _dir: dir,
            config_path,
            session_key: Key::generate(),
        })
    }

    /// Path of the guild settings file for this test.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the guild settings file back as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file contents
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_config(&self) -> Result<serde_json::Value, crate::error::TestError> {
        let contents = std::fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Key signing this test's session cookies.
    pub fn session_key(&self) -> Key {
        self.session_key.clone()
    }

    /// An empty cookie jar signed with this test's key, as a visitor without
    /// cookies would present.
    ///
    /// # Example
    /// ```rust,ignore
    /// let test = TestContext::new()?;
    /// let session = AuthSession::new(test.session_jar(), false);
    /// ```
    pub fn session_jar(&self) -> SignedCookieJar {
        SignedCookieJar::new(self.session_key())
    }
}
