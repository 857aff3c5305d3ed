//! Generic validation and mutation engine for reference records.
//!
//! One `RecordManager<R>` per record kind, all sharing the same contract:
//! validate, add, find-or-fail, update, delete and list.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{DomainRecord, Rejection};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence contract for one record kind.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RecordStore<R: DomainRecord>: Send + Sync {
    /// Insert when `record.id()` is `None`, otherwise overwrite that row
    async fn save(&self, record: R) -> AppResult<R>;

    /// Every record, in storage order
    async fn find_all(&self) -> AppResult<Vec<R>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<R>>;

    async fn delete(&self, record: R) -> AppResult<()>;
}

/// Record use cases exposed to the HTTP layer.
#[async_trait]
pub trait RecordService<R: DomainRecord>: Send + Sync {
    /// Minimum-viable-record check; performs no I/O
    fn validate(&self, candidate: &R) -> Result<(), Rejection>;

    /// Validate and persist a new record. Nothing is saved on rejection.
    async fn add(&self, candidate: R) -> AppResult<R>;

    async fn find_by_id_or_fail(&self, id: i32) -> AppResult<R>;

    /// Validate `form` and copy its update fields onto the stored record
    async fn update(&self, id: i32, form: R) -> AppResult<R>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn list_all(&self) -> AppResult<Vec<R>>;
}

/// `RecordService` backed by a `RecordStore`.
pub struct RecordManager<R: DomainRecord> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: DomainRecord> RecordManager<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R: DomainRecord> RecordService<R> for RecordManager<R> {
    fn validate(&self, candidate: &R) -> Result<(), Rejection> {
        candidate.check()
    }

    async fn add(&self, mut candidate: R) -> AppResult<R> {
        if let Err(rejection) = self.validate(&candidate) {
            tracing::debug!(kind = R::KIND, %rejection, "Rejected new record");
            return Err(rejection.into());
        }

        candidate.clear_id();
        let saved = self.store.save(candidate).await?;
        tracing::info!(kind = R::KIND, id = ?saved.id(), "Record created");
        Ok(saved)
    }

    async fn find_by_id_or_fail(&self, id: i32) -> AppResult<R> {
        self.store.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, form: R) -> AppResult<R> {
        let mut existing = self.find_by_id_or_fail(id).await?;

        if let Err(rejection) = self.validate(&form) {
            tracing::debug!(kind = R::KIND, id, %rejection, "Rejected record update");
            return Err(rejection.into());
        }

        existing.merge_from(&form);
        let saved = self.store.save(existing).await?;
        tracing::info!(kind = R::KIND, id, "Record updated");
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let existing = self.find_by_id_or_fail(id).await?;
        self.store.delete(existing).await?;
        tracing::info!(kind = R::KIND, id, "Record deleted");
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<R>> {
        self.store.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BidList, CurvePoint};
    use crate::errors::AppError;
    use mockall::predicate::*;

    fn manager<R: DomainRecord>(store: MockRecordStore<R>) -> RecordManager<R> {
        RecordManager::new(Arc::new(store))
    }

    fn stored_bid(id: i32) -> BidList {
        BidList {
            id: Some(id),
            ..BidList::new("Account", "Type", 10.0)
        }
    }

    #[tokio::test]
    async fn test_add_rejected_without_persistence() {
        let mut store = MockRecordStore::<BidList>::new();
        store.expect_save().never();

        let result = manager(store).add(BidList::default()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_clears_client_id() {
        let mut store = MockRecordStore::<BidList>::new();
        store
            .expect_save()
            .withf(|record| record.id.is_none())
            .times(1)
            .returning(|mut record| {
                record.id = Some(1);
                Ok(record)
            });

        let candidate = BidList {
            id: Some(42),
            ..BidList::new("Account", "Type", 10.0)
        };
        let saved = manager(store).add(candidate).await.unwrap();
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let mut store = MockRecordStore::<BidList>::new();
        store.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let result = manager(store).find_by_id_or_fail(9).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut store = MockRecordStore::<BidList>::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_save().never();

        let result = manager(store)
            .update(3, BidList::new("New", "New", 1.0))
            .await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_update_does_not_save() {
        let mut store = MockRecordStore::<BidList>::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_bid(id))));
        store.expect_save().never();

        let result = manager(store).update(5, BidList::default()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_copies_form_and_keeps_id() {
        let mut store = MockRecordStore::<BidList>::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_bid(id))));
        store
            .expect_save()
            .withf(|record| record.id == Some(5))
            .times(1)
            .returning(Ok);

        let form = BidList {
            id: Some(99),
            ..BidList::new("Updated", "Other", 25.5)
        };
        let saved = manager(store).update(5, form).await.unwrap();

        assert_eq!(saved.id, Some(5));
        assert_eq!(saved.account.as_deref(), Some("Updated"));
        assert_eq!(saved.bid_type.as_deref(), Some("Other"));
        assert_eq!(saved.bid_quantity, Some(25.5));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut store = MockRecordStore::<CurvePoint>::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_delete().never();

        let result = manager(store).delete(1).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut store = MockRecordStore::<CurvePoint>::new();
        store.expect_find_by_id().returning(|id| {
            Ok(Some(CurvePoint {
                id: Some(id),
                ..CurvePoint::new(1, 2.0, 3.0)
            }))
        });
        store
            .expect_delete()
            .withf(|record| record.id == Some(4))
            .times(1)
            .returning(|_| Ok(()));

        assert!(manager(store).delete(4).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_all_passes_through() {
        let mut store = MockRecordStore::<CurvePoint>::new();
        store
            .expect_find_all()
            .returning(|| Ok(vec![CurvePoint::new(1, 1.0, 1.0), CurvePoint::new(2, 2.0, 2.0)]));

        let records = manager(store).list_all().await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
