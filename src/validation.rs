//! Field validators for the contact form
//!
//! Pure predicates over raw input. They never fail; callers decide which
//! error to report.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace or extra `@` in any segment
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

/// True if the value has at least one non-whitespace character
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Syntactic email check. Does not verify the domain exists.
pub fn is_valid_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod non_empty {
        use super::*;

        #[test]
        fn test_empty_string_is_empty() {
            assert!(!is_non_empty(""));
        }

        #[test]
        fn test_whitespace_only_is_empty() {
            for value in [" ", "   ", "\t", "\n", " \t\r\n ", "\u{3000}"] {
                assert!(!is_non_empty(value), "{value:?} should be empty");
            }
        }

        #[test]
        fn test_any_visible_character_counts() {
            for value in ["a", " a", "a ", "\tJane\n", "."] {
                assert!(is_non_empty(value), "{value:?} should be non-empty");
            }
        }
    }

    mod email_shape {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert!(is_valid_email_shape("a@b.co"));
        }

        #[test]
        fn test_accepts_dotted_local_and_subdomain() {
            assert!(is_valid_email_shape("first.last@sub.domain.com"));
        }

        #[test]
        fn test_rejects_missing_at() {
            assert!(!is_valid_email_shape("no-at-sign"));
        }

        #[test]
        fn test_rejects_domain_without_dot() {
            assert!(!is_valid_email_shape("a@b"));
        }

        #[test]
        fn test_rejects_empty_local_part() {
            assert!(!is_valid_email_shape("@b.com"));
        }

        #[test]
        fn test_rejects_empty_domain_label() {
            assert!(!is_valid_email_shape("a@.com"));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!is_valid_email_shape("jane doe@x.com"));
            assert!(!is_valid_email_shape(" jane@x.com"));
            assert!(!is_valid_email_shape("a@b@c.com"));
        }

        #[test]
        fn test_rejects_empty_string() {
            assert!(!is_valid_email_shape(""));
        }
    }
}
