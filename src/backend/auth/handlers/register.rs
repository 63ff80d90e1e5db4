/**
 * Register Handler
 *
 * `POST /api/users`
 *
 * 1. Validate name, email and password, reporting every violation at once
 * 2. Reject an email that is already registered
 * 3. Derive the avatar, hash the password, store the user
 * 4. Return a token for the new user
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::backend::auth::avatar::gravatar_url;
use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure, or the email is taken
/// * `500 Internal Server Error` - hashing, store or signing failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(SharedError::from)?;

    if state.users.find_user_by_email(&request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", request.email);
        return Err(BackendError::DuplicateUser);
    }

    let avatar = gravatar_url(&request.email);
    let password_hash = hash_password(request.password, state.config.bcrypt_cost).await?;
    let user = User::new(request.name, request.email, password_hash, avatar);

    state.users.insert_user(&user).await.map_err(|e| match e {
        StoreError::DuplicateKey(key) => {
            tracing::warn!("Registration lost insert race: {}", key);
            BackendError::DuplicateUser
        }
        other => other.into(),
    })?;

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { token }))
}
