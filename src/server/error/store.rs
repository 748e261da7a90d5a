use std::path::PathBuf;
use thiserror::Error;

/// Failures of the guild settings file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the settings file failed.
    #[error("Failed to access guild config file '{}': {source}", path.display())]
    Io {
        /// Location of the settings file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file does not contain a valid guild settings mapping.
    ///
    /// There is no recovery path; the request is halted with a 500 and the file
    /// has to be repaired by hand.
    #[error("Guild config file '{}' is corrupt: {source}", path.display())]
    Corrupt {
        /// Location of the settings file
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be serialized.
    #[error("Failed to serialize guild config: {0}")]
    Serialize(#[source] serde_json::Error),
}
