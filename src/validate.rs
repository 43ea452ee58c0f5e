//! Field validators for the add-row form.
//!
//! Each rule is a pure function from the raw input string to an optional
//! message. `None` means the value passes; absent input passes every rule
//! except `required`. Blocking rules stop submission, warning rules are only
//! displayed.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single validation rule.
pub type Validator = fn(&str) -> Option<String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").unwrap());
static AOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r".+@aol\.com").unwrap());

/// First failing blocking rule wins.
pub fn first_error(validators: &[Validator], value: &str) -> Option<String> {
    validators.iter().find_map(|v| v(value))
}

// ----- blocking rules -----

pub fn required(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Required".to_string())
    } else {
        None
    }
}

pub fn number(value: &str) -> Option<String> {
    if !value.is_empty() && value.parse::<f64>().is_err() {
        Some("Must be a number".to_string())
    } else {
        None
    }
}

pub fn min_value(value: &str, min: f64) -> Option<String> {
    match value.parse::<f64>() {
        Ok(n) if n < min => Some(format!("Must be at least {min}")),
        _ => None,
    }
}

pub fn min_value_1(value: &str) -> Option<String> {
    min_value(value, 1.0)
}

pub fn max_length(value: &str, max: usize) -> Option<String> {
    if value.chars().count() > max {
        Some(format!("Must be {max} characters or less"))
    } else {
        None
    }
}

pub fn max_length_15(value: &str) -> Option<String> {
    max_length(value, 15)
}

pub fn email(value: &str) -> Option<String> {
    if !value.is_empty() && !EMAIL_RE.is_match(value) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

// ----- warning rules -----

pub fn letters_only(value: &str) -> Option<String> {
    if !value.is_empty() && value.chars().any(|c| !c.is_alphabetic()) {
        Some("Only letters".to_string())
    } else {
        None
    }
}

pub fn too_much(value: &str) -> Option<String> {
    match value.parse::<f64>() {
        Ok(n) if n > 1_000_000.0 => Some("Too much".to_string()),
        _ => None,
    }
}

pub fn aol(value: &str) -> Option<String> {
    if AOL_RE.is_match(value) {
        Some("Really? You still use AOL for your email?".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_input() {
        assert_eq!(required("").as_deref(), Some("Required"));
        assert!(required("7").is_none());
    }

    #[test]
    fn number_rejects_non_numeric() {
        assert_eq!(number("abc").as_deref(), Some("Must be a number"));
        assert!(number("42").is_none());
        assert!(number("4.5").is_none());
        // absent input is not this rule's problem
        assert!(number("").is_none());
    }

    #[test]
    fn min_value_rejects_below_threshold() {
        assert_eq!(min_value_1("0").as_deref(), Some("Must be at least 1"));
        assert!(min_value_1("1").is_none());
        assert!(min_value_1("250").is_none());
        assert!(min_value_1("").is_none());
    }

    #[test]
    fn max_length_rejects_long_strings() {
        let long = "abcdefghijklmnop"; // 16 chars
        assert_eq!(
            max_length_15(long).as_deref(),
            Some("Must be 15 characters or less")
        );
        assert!(max_length_15("abcdefghijklmno").is_none()); // exactly 15
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(email("user@example.com").is_none());
        assert!(email("USER@EXAMPLE.COM").is_none());
        assert_eq!(email("not-an-email").as_deref(), Some("Invalid email address"));
        assert_eq!(email("a@b").as_deref(), Some("Invalid email address"));
        assert!(email("").is_none());
    }

    #[test]
    fn letters_only_warns_on_digits() {
        assert_eq!(letters_only("ab1").as_deref(), Some("Only letters"));
        assert!(letters_only("Анна").is_none());
        assert!(letters_only("Anna").is_none());
    }

    #[test]
    fn too_much_warns_above_a_million() {
        assert_eq!(too_much("1000001").as_deref(), Some("Too much"));
        assert!(too_much("1000000").is_none());
        assert!(too_much("nope").is_none());
    }

    #[test]
    fn aol_addresses_get_the_joke() {
        assert!(aol("grandma@aol.com").is_some());
        assert!(aol("user@example.com").is_none());
    }

    #[test]
    fn first_error_picks_the_first_failure() {
        let rules: &[Validator] = &[required, number, min_value_1];
        assert_eq!(first_error(rules, "").as_deref(), Some("Required"));
        assert_eq!(first_error(rules, "x").as_deref(), Some("Must be a number"));
        assert_eq!(first_error(rules, "0").as_deref(), Some("Must be at least 1"));
        assert!(first_error(rules, "12").is_none());
    }
}
