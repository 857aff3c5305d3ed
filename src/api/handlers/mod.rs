//! HTTP request handlers.

pub mod auth_handler;
pub mod home_handler;
pub mod record_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use home_handler::home_routes;
pub use record_handler::record_routes;
pub use user_handler::user_routes;
