//! Store Module
//!
//! Implementations of the two document collections the API works on:
//!
//! - [`UserStore`](crate::backend::auth::users::UserStore) - user records
//! - [`PostStore`](crate::backend::posts::db::PostStore) - post documents with
//!   their embedded likes and comments
//!
//! Two backends implement both contracts:
//!
//! - **`postgres`** - `PgStore`, PostgreSQL through sqlx; posts keep their like
//!   and comment lists in JSONB columns
//! - **`memory`** - `MemoryStore`, maps behind a `tokio::sync::RwLock`, used
//!   when no `DATABASE_URL` is configured and by the test suite
//!
//! Every call is atomic on a single document and nothing more. Handlers that
//! read a post, change it and save it back are not isolated from each other.

use thiserror::Error;

/// PostgreSQL store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver failed (connection, query, decoding)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An insert hit a unique constraint
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Schema migrations could not be applied
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;
