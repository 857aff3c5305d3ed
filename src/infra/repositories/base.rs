//! Generic SeaORM-backed record store.
//!
//! Every reference-record kind is persisted the same way, so a single
//! `SeaStore<E>` implements `RecordStore<R>` for any entity whose model
//! converts into `R` and whose active model can be built from `R`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, PrimaryKeyTrait,
};
use std::marker::PhantomData;

use crate::domain::DomainRecord;
use crate::errors::{AppError, AppResult};
use crate::services::RecordStore;

/// Record store over the table of entity `E`.
pub struct SeaStore<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaStore<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Saving over a row that no longer exists means a concurrent delete won.
fn vanished_to_not_found(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
        other => AppError::from(other),
    }
}

#[async_trait]
impl<E, R> RecordStore<R> for SeaStore<E>
where
    R: DomainRecord,
    E: EntityTrait,
    E::Model: FromQueryResult + IntoActiveModel<E::ActiveModel> + Into<R> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + From<R> + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn save(&self, record: R) -> AppResult<R> {
        let is_new = record.id().is_none();
        let active = E::ActiveModel::from(record);

        let model = if is_new {
            active.insert(&self.db).await?
        } else {
            active.update(&self.db).await.map_err(vanished_to_not_found)?
        };

        Ok(model.into())
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        let models = E::find().all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<R>> {
        let model = E::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn delete(&self, record: R) -> AppResult<()> {
        let id = record.id().ok_or(AppError::NotFound)?;
        let result = E::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
