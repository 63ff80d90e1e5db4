//! Public user profile
//!
//! The shape returned by `GET /api/auth`. It is built from the stored user
//! record and never carries the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information that is safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique across users)
    pub email: String,
    /// Gravatar URL derived from the email at registration
    pub avatar: String,
    /// Registration time
    pub date: DateTime<Utc>,
}
