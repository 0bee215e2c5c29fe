//! E-mail validation and normalization

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of an e-mail address (RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("e-mail regex is valid")
});

/// Check whether `email` is a syntactically valid address
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Normalize an e-mail address: trim surrounding whitespace and lower-case
/// the domain part. The local part is case-sensitive and kept as given.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
