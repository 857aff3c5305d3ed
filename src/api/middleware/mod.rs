//! API middleware.

mod auth;

pub use auth::{guard, require_admin, require_login, require_user, session_middleware};
