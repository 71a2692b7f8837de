//! Email address validation.

use regex::Regex;
use std::sync::OnceLock;

/// `local@domain.tld` with ASCII character classes and a TLD of two or more
/// letters. No RFC 5322 corner cases.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check whether `email` looks like an email address.
///
/// # Examples
///
/// ```
/// use pdfmerge::utils::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
