//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Check whether a string looks like an email address
///
/// This is a shape check for request validation, not full RFC 5321
/// conformance; the credential store remains the source of truth.
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && value.len() <= 254 && EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@no-local.com"));
    }
}
