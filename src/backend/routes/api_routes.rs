/**
 * Identity Routes
 *
 * - `POST /api/users` - Register
 * - `POST /api/auth` - Login
 * - `GET /api/auth` - Current user (requires authentication)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login))
}

/// Routes that need the token gate
pub fn protected_api_routes() -> Router<AppState> {
    Router::new().route("/api/auth", get(get_me))
}
