//! In-memory stores and a fully wired application for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use poseidon::api::{create_router, AppState};
use poseidon::config::{Config, HashingParams};
use poseidon::domain::{
    BidList, CurvePoint, DomainRecord, NewUser, Rating, RuleName, Session, Trade, User,
};
use poseidon::errors::{AppError, AppResult};
use poseidon::infra::{SessionRepository, UserRepository};
use poseidon::services::{
    Authenticator, CredentialHasher, RecordManager, RecordStore, Services, UserManager,
};

pub const SECRET: &str = "integration-test-secret-32-chars!!";
pub const ADMIN_PASSWORD: &str = "Admin123!";
pub const USER_PASSWORD: &str = "User1234!";

pub fn hasher() -> Arc<CredentialHasher> {
    Arc::new(
        CredentialHasher::new(&HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap(),
    )
}

/// Vec-backed record store. `assign` writes a generated id into a record.
pub struct MemoryRecords<R> {
    rows: Mutex<Vec<R>>,
    next_id: Mutex<i32>,
    assign: fn(&mut R, i32),
}

impl<R: DomainRecord> MemoryRecords<R> {
    pub fn new(assign: fn(&mut R, i32)) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            assign,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl<R: DomainRecord> RecordStore<R> for MemoryRecords<R> {
    async fn save(&self, mut record: R) -> AppResult<R> {
        let mut rows = self.rows.lock().unwrap();

        match record.id() {
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                (self.assign)(&mut record, *next_id);
                *next_id += 1;
                rows.push(record.clone());
            }
            Some(id) => {
                let slot = rows
                    .iter_mut()
                    .find(|row| row.id() == Some(id))
                    .ok_or(AppError::NotFound)?;
                *slot = record.clone();
            }
        }

        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<R>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    async fn delete(&self, record: R) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id() != record.id());

        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl MemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let created = User {
            id: rows.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            username: user.username,
            password_hash: user.password_hash,
            fullname: user.fullname,
            role: user.role,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, user: NewUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        *slot = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            fullname: user.fullname,
            role: user.role,
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);

        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySessions {
    rows: Mutex<HashMap<Uuid, Session>>,
}

#[async_trait]
impl SessionRepository for MemorySessions {
    async fn create(&self, user_id: i32, expires_at: DateTime<Utc>) -> AppResult<Session> {
        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            expires_at,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_active(&self, id: Uuid) -> AppResult<Option<Session>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&id)
            .filter(|s| s.is_active_at(Utc::now()))
            .cloned())
    }

    async fn revoke(&self, id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, s| s.expires_at > now);
        Ok((before - rows.len()) as u64)
    }
}

impl MemorySessions {
    pub fn contains(&self, id: Uuid) -> bool {
        self.rows.lock().unwrap().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

pub fn seeded_users(hasher: &CredentialHasher) -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "admin".to_string(),
            password_hash: hasher.hash(ADMIN_PASSWORD).unwrap(),
            fullname: "Administrator".to_string(),
            role: "ADMIN".to_string(),
        },
        User {
            id: 2,
            username: "user".to_string(),
            password_hash: hasher.hash(USER_PASSWORD).unwrap(),
            fullname: "Regular User".to_string(),
            role: "USER".to_string(),
        },
    ]
}

/// Application state over in-memory stores, seeded with one ADMIN and one USER.
pub fn test_state() -> AppState {
    let hasher = hasher();
    let users = Arc::new(MemoryUsers::with(seeded_users(&hasher)));
    let sessions = Arc::new(MemorySessions::default());

    let services = Services {
        auth: Arc::new(Authenticator::new(
            users.clone(),
            sessions,
            hasher.clone(),
            Config::with_secret(SECRET),
        )),
        users: Arc::new(UserManager::new(users, hasher)),
        bid_lists: Arc::new(RecordManager::<BidList>::new(Arc::new(MemoryRecords::new(
            |r: &mut BidList, id| r.id = Some(id),
        )))),
        curve_points: Arc::new(RecordManager::<CurvePoint>::new(Arc::new(
            MemoryRecords::new(|r: &mut CurvePoint, id| r.id = Some(id)),
        ))),
        ratings: Arc::new(RecordManager::<Rating>::new(Arc::new(MemoryRecords::new(
            |r: &mut Rating, id| r.id = Some(id),
        )))),
        rule_names: Arc::new(RecordManager::<RuleName>::new(Arc::new(MemoryRecords::new(
            |r: &mut RuleName, id| r.id = Some(id),
        )))),
        trades: Arc::new(RecordManager::<Trade>::new(Arc::new(MemoryRecords::new(
            |r: &mut Trade, id| r.id = Some(id),
        )))),
    };

    AppState::new(services, None)
}

pub fn test_app() -> axum::Router {
    create_router(test_state())
}
