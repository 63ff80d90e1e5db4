/**
 * Password Hashing
 *
 * bcrypt with a random per-password salt. Hashing and verification are
 * CPU-bound, so both run on the blocking thread pool.
 */

use crate::backend::error::BackendError;

/// Hash `password` with the given bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::internal(format!("hashing task failed: {}", e)))?
        .map_err(BackendError::from)
}

/// Compare `password` against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BackendError::internal(format!("verification task failed: {}", e)))?
        .map_err(BackendError::from)
}
