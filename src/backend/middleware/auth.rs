/**
 * Authentication Middleware
 *
 * Guards every route that needs a caller identity. The token travels in the
 * `x-auth-token` header, without any scheme prefix. On success the verified
 * user id is attached to the request extensions for the handlers.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Header carrying the token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// 1. Reads the token from the `x-auth-token` header
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 with "No token, authorization denied" when the header is
/// missing or empty, and 401 with "Token is not valid" otherwise.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", AUTH_TOKEN_HEADER);
            BackendError::unauthenticated("No token, authorization denied")
        })?;

    let token = header.to_str().map_err(|_| {
        tracing::warn!("Non-ASCII {} header", AUTH_TOKEN_HEADER);
        BackendError::unauthenticated("Token is not valid")
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user.id,
    });

    Ok(next.run(request).await)
}
