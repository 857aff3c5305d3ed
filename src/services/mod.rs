//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, never on
//! concrete stores.

mod auth_service;
pub mod container;
mod credentials;
mod record_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, LoginOutcome};
pub use credentials::CredentialHasher;
pub use record_service::{RecordManager, RecordService, RecordStore};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use record_service::MockRecordStore;
