/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The loaded configuration
 * - The token service
 * - The credential store and the content store, as trait objects
 *
 * Both stores may be the same object (`PgStore` and `MemoryStore` implement
 * both contracts). Nothing else is shared between requests.
 *
 * # Example
 *
 * ```rust
 * use devconnect::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) -> usize {
 *     state.posts.list_posts().await.map(|p| p.len()).unwrap_or(0)
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::posts::db::PostStore;
use crate::backend::store::MemoryStore;
use crate::shared::AppConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: TokenService,
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self {
            tokens: TokenService::from_config(&config),
            config: Arc::new(config),
            users,
            posts,
        }
    }

    /// State backed by a fresh [`MemoryStore`]
    pub fn in_memory(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(config, store.clone(), store)
    }
}

/// Lets the token gate extract only the token service
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
