//! Login session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use crate::domain::Session;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Open a session for `user_id`, valid until `expires_at`
    async fn create(&self, user_id: i32, expires_at: DateTime<Utc>) -> AppResult<Session>;

    /// Session `id`, unless it was revoked or has expired
    async fn find_active(&self, id: Uuid) -> AppResult<Option<Session>>;

    /// Delete session `id`. Unknown ids are ignored.
    async fn revoke(&self, id: Uuid) -> AppResult<()>;

    /// Delete every session that expired at or before `now`; returns how many went.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create(&self, user_id: i32, expires_at: DateTime<Utc>) -> AppResult<Session> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
            expires_at: Set(expires_at),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Session::from(model))
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Session>> {
        let result = SessionEntity::find_by_id(id)
            .filter(session::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.db)
            .await?;

        Ok(result.map(Session::from))
    }

    async fn revoke(&self, id: Uuid) -> AppResult<()> {
        SessionEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = SessionEntity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
