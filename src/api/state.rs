//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::Services;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Absent when services run over non-database stores (tests)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire every service over the given database.
    pub fn from_config(database: Arc<Database>, config: Config) -> AppResult<Self> {
        let services = Services::from_connection(database.get_connection(), config)?;

        Ok(Self {
            services,
            database: Some(database),
        })
    }

    /// Build state from services assembled by the caller.
    pub fn new(services: Services, database: Option<Arc<Database>>) -> Self {
        Self { services, database }
    }
}
