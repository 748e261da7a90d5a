//! Persistence layer.
//!
//! Guild settings live in a single JSON file behind the `ConfigStore` trait so the
//! rest of the application never touches the file directly and the backing store
//! can be swapped without changing handlers or services.

pub mod guild_config;

pub use guild_config::{ConfigStore, JsonConfigStore};

#[cfg(test)]
mod test;
