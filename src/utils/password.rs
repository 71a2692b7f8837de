//! Password helpers.
//!
//! These are convenience checks, not a credential store: the hash is a bare
//! unsalted SHA-256 and must not be used on its own to store passwords.

use sha2::{Digest, Sha256};

/// Minimum length, in characters, of a strong password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Lowercase hex SHA-256 digest of the UTF-8 bytes of `password`.
///
/// # Examples
///
/// ```
/// use pdfmerge::utils::hash_password;
///
/// assert_eq!(hash_password("abc").len(), 64);
/// assert_eq!(hash_password("abc"), hash_password("abc"));
/// ```
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a password against the strength rules.
///
/// A strong password has at least [`MIN_PASSWORD_LENGTH`] characters and
/// contains an ASCII uppercase letter, an ASCII lowercase letter, an ASCII
/// digit, and a special character. Any character outside `[A-Za-z0-9_]`
/// counts as special; the underscore does not.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}

fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}
