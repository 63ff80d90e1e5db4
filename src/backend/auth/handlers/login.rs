/**
 * Login Handler
 *
 * `POST /api/auth`
 *
 * An unknown email and a wrong password produce the same error, so the
 * response does not reveal which addresses are registered.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or invalid credentials
/// * `500 Internal Server Error` - store, hash comparison or signing failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(SharedError::from)?;

    let Some(user) = state.users.find_user_by_email(&request.email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(BackendError::InvalidCredentials);
    };

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(TokenResponse { token }))
}
