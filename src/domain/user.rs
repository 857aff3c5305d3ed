//! User directory entities and the authenticated principal.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::password::{validate_password_strength, validate_role};
use crate::config::{ROLE_ADMIN, ROLE_USER};

/// Roles recognised by the route gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse a stored authority string. Unknown values have no role.
    pub fn from_authority(authority: &str) -> Option<Self> {
        match authority {
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_USER => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored user, including the credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub fullname: String,
    /// Raw authority string as stored
    pub role: String,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::from_authority(&self.role)
    }

    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            username: self.username.clone(),
            fullname: self.fullname.clone(),
            role: self.role(),
        }
    }
}

/// An authenticated actor, as resolved from a live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Principal {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub role: Option<Role>,
}

impl Principal {
    /// Granted roles. A principal holds at most one.
    pub fn roles(&self) -> Vec<Role> {
        self.role.into_iter().collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

/// New user data to persist, with the password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub fullname: String,
    pub role: String,
}

/// User directory form, submitted on create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserForm {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Username is mandatory"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(custom(function = "validate_password_strength"))]
    #[schema(example = "Admin123!", min_length = 8)]
    pub password: String,
    #[validate(length(min = 1, message = "FullName is mandatory"))]
    #[schema(example = "Administrator")]
    pub fullname: String,
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "ADMIN")]
    pub role: String,
}

impl UserForm {
    /// Edit form for an existing user. The password is never sent back.
    pub fn for_edit(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            password: String::new(),
            fullname: user.fullname.clone(),
            role: user.role.clone(),
        }
    }
}

/// User as shown in the directory (safe to return to client).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "Administrator")]
    pub fullname: String,
    #[schema(example = "ADMIN")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
            role: user.role,
        }
    }
}
