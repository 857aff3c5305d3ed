//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod bid_list;
pub mod curve_point;
pub mod rating;
pub mod rule_name;
pub mod session;
pub mod trade;
pub mod user;
