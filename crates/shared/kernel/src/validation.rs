//! Input predicates shared by the registration form and the notify-me prompt.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// Something, an `@`, something, a dot, something; no whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// At least two whitespace-separated words.
#[must_use]
pub fn is_full_name(name: &str) -> bool {
    name.split_whitespace().nth(1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_examples() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_examples() {
        assert!(is_full_name("Jane Doe"));
        assert!(is_full_name("Jean  Luc   Picard"));
        assert!(!is_full_name("Jane"));
        assert!(!is_full_name("   "));
    }
}
