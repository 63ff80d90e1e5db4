/**
 * Store Selection
 *
 * Picks the backing store from the loaded configuration.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` set: connect to PostgreSQL and run migrations. A failure
 *   here aborts startup, since silently falling back would lose writes.
 * - `DATABASE_URL` unset: use the in-memory store. Data lives only as long
 *   as the process.
 */

use std::sync::Arc;

use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, StoreResult};
use crate::shared::AppConfig;

/// Build the application state with the store the configuration asks for
///
/// # Errors
///
/// Returns a `StoreError` if the database is configured but cannot be
/// reached or migrated.
pub async fn load_state(config: AppConfig) -> StoreResult<AppState> {
    match config.database_url.clone() {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = Arc::new(PgStore::connect(&url).await.inspect_err(|e| {
                tracing::error!("Failed to initialize database: {}", e);
            })?);
            Ok(AppState::new(config, store.clone(), store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
            let store = Arc::new(MemoryStore::new());
            Ok(AppState::new(config, store.clone(), store))
        }
    }
}
