//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `user add` - Bootstrap a user without going through the web screens

pub mod args;

pub use args::{Cli, Commands};
