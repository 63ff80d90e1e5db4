/**
 * Router Configuration
 *
 * Combines the public and protected route sets into a single Axum router.
 *
 * The token gate is attached with `route_layer` to the protected set only,
 * so it runs for matched protected routes and never for login, register or
 * unknown paths. `POST /api/auth` and `GET /api/auth` share a path but live
 * in different sets; axum merges them into one method router.
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{protected_api_routes, public_api_routes};
use crate::backend::routes::post_routes::post_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = protected_api_routes()
        .merge(post_routes())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    Router::new()
        .merge(public_api_routes())
        .merge(protected)
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
