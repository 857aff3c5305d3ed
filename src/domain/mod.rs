//! Domain layer - Reference records, users and access rules
//!
//! Nothing here touches the database or HTTP; persistence and transport
//! are layered on top in `infra` and `api`.

pub mod access;
pub mod bid_list;
pub mod curve_point;
pub mod password;
pub mod rating;
mod record;
pub mod rule_name;
pub mod session;
pub mod trade;
pub mod user;

pub use access::{authorize, route_after_login, AuthorizationDecision, Requirement};
pub use bid_list::BidList;
pub use curve_point::CurvePoint;
pub use rating::Rating;
pub use record::{AsFieldValue, DomainRecord, Field, FieldValue, Rejection};
pub use rule_name::RuleName;
pub use session::Session;
pub use trade::Trade;
pub use user::{NewUser, Principal, Role, User, UserForm, UserResponse};
