use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for login form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

// Deliberately loose: three non-blank, `@`-free runs around one `@` and a `.`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Returns `true` if `email` has the shape `local@domain.tld`.
///
/// Accepts plenty of addresses RFC 5322 would reject (`a@b..c`, `a@b.c.d.e`);
/// it only requires the three segments to be present and free of whitespace
/// and `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates an email address with [`is_valid_email`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailFormat)
    }
}
