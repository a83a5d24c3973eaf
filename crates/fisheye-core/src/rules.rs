//! # Field Rules
//!
//! The individual checks applied to each contact-form field. Each rule is a
//! pure function from the field's current value to a pass/fail boolean; the
//! [`crate::FormValidator`] composes them and drives the error indicators.
//!
//! | Field | Fails when |
//! |-------|------------|
//! | first / last name | trimmed length < 2, or trimmed value does not match [`NAME_PATTERN`] |
//! | email | trimmed length < 2, or native validity is false, or the raw value does not match [`EMAIL_PATTERN`] |
//! | message | trimmed length < 2 |
//!
//! Lengths are counted in characters, not bytes.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum trimmed length, in characters, for every field.
pub const MIN_LENGTH: usize = 2;

/// Letters (ASCII plus U+00C0..U+017F) in up to three word groups joined by
/// a space, hyphen, or apostrophe, with an optional trailing period.
pub const NAME_PATTERN: &str =
    r"^[a-zA-Z\x{00C0}-\x{017F}]+(?:[ '\-][a-zA-Z\x{00C0}-\x{017F}]+){0,2}\.?$";

/// A local part, an `@`, and a dotted domain, none containing whitespace or `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The HTML Living Standard "valid e-mail address" production used by
/// `<input type="email">`.
pub const HTML_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|e| unreachable!("field pattern {pattern:?} failed to compile: {e}"))
    })
}

fn name_regex() -> &'static Regex {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&NAME_RE, NAME_PATTERN)
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&EMAIL_RE, EMAIL_PATTERN)
}

fn html_email_regex() -> &'static Regex {
    static HTML_EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&HTML_EMAIL_RE, HTML_EMAIL_PATTERN)
}

/// Length in Unicode scalar values. A character outside the Basic
/// Multilingual Plane counts once, where a UTF-16 length would count two.
fn long_enough(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_LENGTH
}

/// Check a first or last name.
pub fn name_is_valid(raw: &str) -> bool {
    let trimmed = raw.trim();
    long_enough(trimmed) && name_regex().is_match(trimmed)
}

/// Check an email address.
///
/// The length rule looks at the trimmed value while the pattern is matched
/// against `raw` untouched, so surrounding whitespace fails the pattern.
/// `natively_valid` is the input element's own constraint-validation verdict.
pub fn email_is_valid(raw: &str, natively_valid: bool) -> bool {
    long_enough(raw.trim()) && natively_valid && email_regex().is_match(raw)
}

/// Check the free-text message.
pub fn message_is_valid(raw: &str) -> bool {
    long_enough(raw.trim())
}

/// Constraint validation for `<input type="email">` without `multiple`.
///
/// The value is sanitized first (line breaks removed, leading and trailing
/// ASCII whitespace stripped). An empty sanitized value is valid; anything
/// else must match [`HTML_EMAIL_PATTERN`].
pub fn html_email_validity(raw: &str) -> bool {
    let sanitized: String = raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let sanitized = sanitized.trim_matches(|c: char| c.is_ascii_whitespace());
    sanitized.is_empty() || html_email_regex().is_match(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_name_passes() {
        assert!(name_is_valid("Jean-Paul"));
    }

    #[test]
    fn apostrophe_name_passes() {
        assert!(name_is_valid("O'Brien"));
    }

    #[test]
    fn single_letter_name_fails_length() {
        assert!(!name_is_valid("A"));
    }

    #[test]
    fn digits_in_name_fail_pattern() {
        assert!(!name_is_valid("John123"));
    }

    #[test]
    fn accented_name_passes() {
        assert!(name_is_valid("Müller"));
        assert!(name_is_valid("Éloïse"));
        assert!(name_is_valid("Łukasz"));
    }

    #[test]
    fn three_word_groups_with_trailing_period_pass() {
        assert!(name_is_valid("Mary Anne Smith."));
        assert!(name_is_valid("Jr."));
    }

    #[test]
    fn four_word_groups_fail() {
        assert!(!name_is_valid("Anna Maria de Souza"));
    }

    #[test]
    fn doubled_separator_fails() {
        assert!(!name_is_valid("Jean--Paul"));
        assert!(!name_is_valid("Jean -Paul"));
    }

    #[test]
    fn leading_or_trailing_separator_fails() {
        assert!(!name_is_valid("-Paul"));
        assert!(!name_is_valid("Paul-"));
    }

    #[test]
    fn name_is_trimmed_before_matching() {
        assert!(name_is_valid("  Mimi  "));
    }

    #[test]
    fn name_outside_extended_range_fails() {
        // U+0180 is just past Latin Extended-A.
        assert!(!name_is_valid("Aƀc"));
    }

    #[test]
    fn empty_and_whitespace_names_fail() {
        assert!(!name_is_valid(""));
        assert!(!name_is_valid("   "));
        assert!(!name_is_valid(" B "));
    }

    #[test]
    fn plain_email_passes() {
        assert!(email_is_valid("a@b.co", true));
    }

    #[test]
    fn email_without_at_fails() {
        assert!(!email_is_valid("not-an-email", true));
    }

    #[test]
    fn blank_email_fails_length() {
        assert!(!email_is_valid(" ", true));
        assert!(!email_is_valid("", true));
    }

    #[test]
    fn email_without_dot_in_domain_fails_pattern() {
        assert!(!email_is_valid("user@localhost", true));
    }

    #[test]
    fn email_rejected_natively_fails() {
        assert!(!email_is_valid("a@b.co", false));
    }

    #[test]
    fn email_pattern_sees_untrimmed_value() {
        assert!(!email_is_valid(" a@b.co", true));
        assert!(!email_is_valid("a@b.co ", true));
    }

    #[test]
    fn message_length_rule() {
        assert!(!message_is_valid(""));
        assert!(!message_is_valid("x"));
        assert!(!message_is_valid("  x  "));
        assert!(message_is_valid("ok"));
        assert!(message_is_valid("!!"));
    }

    #[test]
    fn message_length_counts_characters() {
        // One character, two bytes.
        assert!(!message_is_valid("é"));
        assert!(message_is_valid("éé"));
    }

    #[test]
    fn astral_character_counts_once() {
        // U+1F600 is two UTF-16 units but a single char.
        assert!(!message_is_valid("😀"));
        assert!(!message_is_valid(" 😀 "));
        assert!(message_is_valid("😀😀"));
        assert!(message_is_valid("a😀"));
    }

    #[test]
    fn html_validity_accepts_empty() {
        assert!(html_email_validity(""));
        assert!(html_email_validity("   "));
    }

    #[test]
    fn html_validity_sanitizes_whitespace() {
        assert!(html_email_validity("  a@b.co \n"));
    }

    #[test]
    fn html_validity_allows_dotless_domain() {
        assert!(html_email_validity("user@localhost"));
    }

    #[test]
    fn html_validity_rejects_malformed() {
        assert!(!html_email_validity("not-an-email"));
        assert!(!html_email_validity("a@-b.co"));
        assert!(!html_email_validity("a b@c.co"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any one- or two-group name built from allowed letters passes.
        #[test]
        fn well_formed_names_pass(
            first in "[a-zA-ZÀ-ſ]{2,12}",
            second in proptest::option::of("[a-zA-ZÀ-ſ]{1,12}"),
            sep in "[ '\\-]",
        ) {
            let name = match second {
                Some(s) => format!("{first}{sep}{s}"),
                None => first,
            };
            prop_assert!(name_is_valid(&name), "expected {name:?} to pass");
        }

        /// A digit anywhere in a name fails the pattern.
        #[test]
        fn names_with_digits_fail(
            head in "[a-zA-Z]{1,6}",
            digit in "[0-9]",
            tail in "[a-zA-Z]{0,6}",
        ) {
            let name = format!("{head}{digit}{tail}");
            prop_assert!(!name_is_valid(&name));
        }

        /// Fewer than two non-whitespace characters always fails every rule.
        #[test]
        fn short_values_fail_every_rule(s in "\\s{0,3}[a-z]?\\s{0,3}") {
            prop_assert!(!name_is_valid(&s));
            prop_assert!(!email_is_valid(&s, true));
            prop_assert!(!message_is_valid(&s));
        }

        /// Messages of two or more characters pass regardless of content.
        #[test]
        fn long_messages_pass(s in "\\PC{2,40}") {
            prop_assume!(s.trim().chars().count() >= 2);
            prop_assert!(message_is_valid(&s));
        }
    }
}
