//! Server-side backend of the guild dashboard.
//!
//! The backend uses Axum as the web framework, signed cookies for visitor state,
//! the oauth2 crate for the Discord login and reqwest for Discord API calls.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and access control
//! - **Service Layer** (`service/`) - Discord API access, authorization rules, settings
//! - **Data Layer** (`data/`) - The guild settings store
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authorization guards
//! - **View** (`view/`) - Server-rendered HTML pages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (Discord API, settings store)
//! - **Startup** (`startup`) - Initialization of clients, store and session key
//! - **Router** (`router`) - Axum route configuration and layers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **AuthSession** reads the visitor's signed session cookies
//! 3. **Controller** checks session state and permissions, calls services
//! 4. **Service** talks to Discord or the settings store
//! 5. **Controller** renders a page or redirects

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod view;
