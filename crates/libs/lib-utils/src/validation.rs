//! # Validation Utilities
//!
//! Input validation helpers.

use once_cell::sync::Lazy;
use regex::Regex;

/// One `@`, a dot in the domain, no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Syntactic email check. No DNS lookup and no length limits.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
