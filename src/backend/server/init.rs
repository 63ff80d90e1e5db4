/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, store selection, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Select and open the store
 * 2. Build the token service from the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_state;
use crate::backend::store::StoreResult;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns a `StoreError` if a configured database is unavailable.
pub async fn create_app(config: AppConfig) -> StoreResult<Router<()>> {
    tracing::info!("Initializing DevConnect backend server");

    let app_state = load_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
