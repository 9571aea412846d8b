//! Reusable field predicates shared by entity schemas.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});
static DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Presence check: at least one character.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Length check counted in characters, not bytes.
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Non-empty and made only of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    DIGITS_RE.is_match(value)
}

pub fn is_well_formed_email(value: &str) -> bool {
    !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Exact, case-sensitive membership in a fixed option list.
pub fn is_one_of(value: &str, options: &[&str]) -> bool {
    options.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::{has_min_chars, is_numeric, is_one_of, is_well_formed_email};

    #[test]
    fn email_accepts_common_addresses() {
        assert!(is_well_formed_email("john@example.com"));
        assert!(is_well_formed_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for value in ["", "john", "john@", "@example.com", "john@example", "a..b@example.com"] {
            assert!(!is_well_formed_email(value), "{value} should be rejected");
        }
    }

    #[test]
    fn numeric_requires_digits_only() {
        assert!(is_numeric("9806053511"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("98060-53511"));
        assert!(!is_numeric("１２３"));
    }

    #[test]
    fn min_chars_counts_characters() {
        assert!(has_min_chars("1234567890", 10));
        assert!(!has_min_chars("123456789", 10));
    }

    #[test]
    fn one_of_is_case_sensitive() {
        assert!(is_one_of("Brother", &["Brother", "Sister"]));
        assert!(!is_one_of("brother", &["Brother", "Sister"]));
    }
}
