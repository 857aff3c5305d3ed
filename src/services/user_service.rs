//! User directory service.
//!
//! Passwords are hashed here with the shared `CredentialHasher`; the
//! repository only ever sees hashes.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use super::CredentialHasher;
use crate::domain::{NewUser, User, UserForm};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Validate the form, refuse duplicate usernames, hash and store
    async fn create_user(&self, form: UserForm) -> AppResult<User>;

    /// Same checks as create; the password is always re-hashed
    async fn update_user(&self, id: i32, form: UserForm) -> AppResult<User>;

    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

pub struct UserManager {
    users: Arc<dyn UserRepository>,
    hasher: Arc<CredentialHasher>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<i32>) -> AppResult<()> {
        match self.users.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict("Username")),
            _ => Ok(()),
        }
    }

    fn new_user(&self, form: UserForm) -> AppResult<NewUser> {
        Ok(NewUser {
            password_hash: self.hasher.hash(&form.password)?,
            username: form.username,
            fullname: form.fullname,
            role: form.role,
        })
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, form: UserForm) -> AppResult<User> {
        form.validate()?;
        self.ensure_username_free(&form.username, None).await?;

        let user = self.users.create(self.new_user(form)?).await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, form: UserForm) -> AppResult<User> {
        self.get_user(id).await?;
        form.validate()?;
        self.ensure_username_free(&form.username, Some(id)).await?;

        let user = self.users.update(id, self.new_user(form)?).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashingParams;
    use crate::infra::MockUserRepository;
    use mockall::predicate::*;

    fn hasher() -> Arc<CredentialHasher> {
        Arc::new(
            CredentialHasher::new(&HashingParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        )
    }

    fn form(username: &str) -> UserForm {
        UserForm {
            id: None,
            username: username.to_string(),
            password: "Secret123!".to_string(),
            fullname: "Jane Doe".to_string(),
            role: "USER".to_string(),
        }
    }

    fn stored(id: i32, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: "$argon2id$stored".to_string(),
            fullname: "Jane Doe".to_string(),
            role: "USER".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let hasher = hasher();
        let check = hasher.clone();

        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(move |new| check.verify("Secret123!", &new.password_hash))
            .times(1)
            .returning(|new| {
                Ok(User {
                    id: 1,
                    username: new.username,
                    password_hash: new.password_hash,
                    fullname: new.fullname,
                    role: new.role,
                })
            });

        let user = UserManager::new(Arc::new(users), hasher)
            .create_user(form("jane"))
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "Secret123!");
    }

    #[tokio::test]
    async fn test_weak_password_rejected_before_storage() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().never();
        users.expect_create().never();

        let weak = UserForm {
            password: "secret".to_string(),
            ..form("jane")
        };
        let result = UserManager::new(Arc::new(users), hasher())
            .create_user(weak)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "jane")
            .returning(|_| Ok(Some(stored(3, "jane"))));
        users.expect_create().never();

        let result = UserManager::new(Arc::new(users), hasher())
            .create_user(form("jane"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_own_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(stored(id, "jane"))));
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored(3, "jane"))));
        users
            .expect_update()
            .withf(|id, new| *id == 3 && new.password_hash.starts_with("$argon2id$"))
            .times(1)
            .returning(|id, new| {
                Ok(User {
                    id,
                    username: new.username,
                    password_hash: new.password_hash,
                    fullname: new.fullname,
                    role: new.role,
                })
            });

        let result = UserManager::new(Arc::new(users), hasher())
            .update_user(3, form("jane"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        users.expect_update().never();

        let result = UserManager::new(Arc::new(users), hasher())
            .update_user(8, form("jane"))
            .await;
        assert!(result.unwrap_err().is_not_found());
    }
}
