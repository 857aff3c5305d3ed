//! Poseidon - Back office for trading reference data
//!
//! CRUD screens over five reference-record kinds (bid lists, curve points,
//! ratings, rule names, trades) and a user directory, behind a
//! session-cookie login with ADMIN and USER roles.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, validation rules, roles and access decisions
//! - **services**: Credential hashing, authentication, record and user use cases
//! - **infra**: Database, migrations and SeaORM repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: View documents returned by the screens
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create the first administrator
//! POSEIDON_USER_PASSWORD='Admin123!' cargo run -- user add --username admin --fullname Administrator
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Principal, Role, User};
pub use errors::{AppError, AppResult};
