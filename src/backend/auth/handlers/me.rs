/**
 * Get Current User Handler
 *
 * `GET /api/auth`, behind the token gate. Returns the caller's profile
 * without the password hash.
 */

use axum::{extract::State, Extension, Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the token names a user that no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<UserProfile>, BackendError> {
    let user = state
        .users
        .find_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.profile()))
}
