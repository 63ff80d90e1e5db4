/**
 * Authentication Handler Types
 *
 * Request and response bodies for the identity endpoints. Missing fields
 * deserialize as empty strings so that they are reported by validation
 * together with every other problem in the request.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request (`POST /api/users`)
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Plaintext; hashed before it reaches the store
    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Login request (`POST /api/auth`)
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}
