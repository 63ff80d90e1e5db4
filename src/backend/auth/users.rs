/**
 * User Model and Credential Store Contract
 *
 * This module defines the stored user record and the operations the
 * identity handlers need from the credential store.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::store::StoreResult;
use crate::shared::UserProfile;

/// User record as persisted in the credential store
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// bcrypt hash, never the plaintext password
    pub password_hash: String,
    /// Gravatar URL derived from the email
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new record with a fresh id
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        }
    }

    /// The record without its password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            date: self.created_at,
        }
    }
}

/// Credential store
///
/// Implementations must reject a second user with the same email with
/// `StoreError::DuplicateKey`, even when the handler's own pre-check raced.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    /// Get user by email (exact match)
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Get user by ID
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
}
