//! Factory methods for creating Discord API payloads.
//!
//! Factories produce the JSON objects Discord returns from `users/@me/guilds`, so
//! tests can deserialize them into the application's own guild model exactly the
//! way a live response would be.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Guild where the credential holds the administrator bit
//! let admin = factory::create_admin_guild("1", "Alpha");
//!
//! // Guild with custom permissions
//! let member = factory::guild::GuildFactory::new()
//!     .guild_id("2")
//!     .name("Beta")
//!     .permissions(0)
//!     .build();
//! ```

pub mod guild;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use guild::{create_admin_guild, create_guild, create_member_guild};
