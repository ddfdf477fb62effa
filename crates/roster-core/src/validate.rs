//! Field validators and input normalizers.
//!
//! Validators are pure predicates over raw input: they never fail, they only
//! answer whether a value is well-formed. Callers decide what to do with a
//! `false` (block submission, mark a field invalid).

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed national dialing prefix for phone numbers.
pub const PHONE_PREFIX: &str = "+91";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").expect("PAN pattern is valid"));
static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("postal code pattern is valid"));
// ASCII digits only; `\d` would accept any Unicode decimal digit.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+91[0-9]{10}$").expect("phone pattern is valid"));

/// Check an email address has a `local@domain.tld` shape.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check a PAN is five uppercase letters, four digits, one uppercase letter.
///
/// Lowercase input is rejected; run it through [`normalize_pan`] first.
pub fn validate_pan(value: &str) -> bool {
    PAN_RE.is_match(value)
}

/// Check a postal code is exactly six digits.
pub fn validate_postal_code(value: &str) -> bool {
    POSTAL_CODE_RE.is_match(value)
}

/// Check a phone number is `+91` followed by exactly ten digits.
pub fn validate_phone_number(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Check a required free-text field has non-whitespace content.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Uppercase and trim a PAN as typed.
pub fn normalize_pan(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Strip dashes and whitespace from a phone number and enforce the national prefix.
///
/// Empty input stays empty so an untouched field is not mistaken for a
/// partially typed number.
pub fn normalize_phone_number(value: &str) -> String {
    let compact: String = value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    if compact.is_empty() || compact.starts_with(PHONE_PREFIX) {
        compact
    } else {
        format!("{}{}", PHONE_PREFIX, compact)
    }
}
