//! Gravatar URL for a user, derived from the email address.

/// Size 200px, rating "pg", mystery-man fallback image
const GRAVATAR_OPTIONS: &str = "s=200&r=pg&d=mm";

/// Protocol-relative Gravatar URL for `email`
///
/// The hash is taken over the trimmed, lowercased address, so the same
/// mailbox always maps to the same avatar.
pub fn gravatar_url(email: &str) -> String {
    let digest = md5::compute(email.trim().to_lowercase().as_bytes());
    format!("//www.gravatar.com/avatar/{:x}?{}", digest, GRAVATAR_OPTIONS)
}
