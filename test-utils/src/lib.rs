//! Guild Dashboard Test Utils
//!
//! Provides shared testing utilities for the guild dashboard. This crate offers a
//! builder pattern for creating test contexts with an isolated guild settings file
//! and a session signing key, plus factories for Discord API payloads.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for seeding the guild settings file
//! - **TestContext**: Test environment owning the settings file and session key
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_guild_config("1", json!({"prefix": "?", "log_channel": null}))
//!         .build()
//!         .await?;
//!
//!     let path = test.config_path();
//!     let jar = test.session_jar();
//!     // Open the store at `path`, wrap `jar` in the session type...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
