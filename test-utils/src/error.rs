use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Writing the seeded guild settings file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seeded guild settings could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
