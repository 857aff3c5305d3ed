//! Service Container - Centralized service wiring.
//!
//! Every service is built once at startup and shared through `Arc`,
//! including the single credential hasher.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{
    AuthService, Authenticator, CredentialHasher, RecordManager, RecordService, RecordStore,
    UserManager, UserService,
};
use crate::config::Config;
use crate::domain::{BidList, CurvePoint, DomainRecord, Rating, RuleName, Trade};
use crate::errors::AppResult;
use crate::infra::repositories::entities::{bid_list, curve_point, rating, rule_name, trade};
use crate::infra::{SeaStore, SessionStore, UserStore};

/// All application services.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub bid_lists: Arc<dyn RecordService<BidList>>,
    pub curve_points: Arc<dyn RecordService<CurvePoint>>,
    pub ratings: Arc<dyn RecordService<Rating>>,
    pub rule_names: Arc<dyn RecordService<RuleName>>,
    pub trades: Arc<dyn RecordService<Trade>>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: DatabaseConnection, config: Config) -> AppResult<Self> {
        let hasher = Arc::new(CredentialHasher::new(&config.hashing)?);
        let users = Arc::new(UserStore::new(db.clone()));
        let sessions = Arc::new(SessionStore::new(db.clone()));

        Ok(Self {
            auth: Arc::new(Authenticator::new(
                users.clone(),
                sessions,
                hasher.clone(),
                config,
            )),
            users: Arc::new(UserManager::new(users, hasher)),
            bid_lists: records::<BidList, bid_list::Entity>(&db),
            curve_points: records::<CurvePoint, curve_point::Entity>(&db),
            ratings: records::<Rating, rating::Entity>(&db),
            rule_names: records::<RuleName, rule_name::Entity>(&db),
            trades: records::<Trade, trade::Entity>(&db),
        })
    }
}

/// Record service for kind `R` stored in the table of entity `E`.
fn records<R, E>(db: &DatabaseConnection) -> Arc<dyn RecordService<R>>
where
    R: DomainRecord,
    SeaStore<E>: RecordStore<R> + 'static,
{
    Arc::new(RecordManager::<R>::new(Arc::new(SeaStore::<E>::new(db.clone()))))
}
