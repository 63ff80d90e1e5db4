//! Authentication Module
//!
//! User registration, login and token handling.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record and credential store contract
//! ├── sessions.rs     - Token service (issue/verify)
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── avatar.rs       - Gravatar URL derivation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user stored → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Who am I**: `x-auth-token` header → token verified → profile returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are stateless; each request is verified on its own
//! - Login failures do not reveal whether the email exists

/// User record and credential store contract
pub mod users;

/// Token issuance and verification
pub mod sessions;

/// Password hashing
pub mod password;

/// Avatar derivation
pub mod avatar;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{User, UserStore};
