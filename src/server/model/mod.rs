//! Domain models shared between the service, data and controller layers.

pub mod discord;
pub mod settings;
