//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM entities and repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{SeaStore, SessionRepository, SessionStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockSessionRepository, MockUserRepository};
