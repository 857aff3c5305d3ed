//! Response shapes shared by every handler.

mod response;

pub use response::{DeniedView, FormView, View};
