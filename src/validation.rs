use regex::Regex;
use std::sync::LazyLock;

use crate::errors::AppError;

const MIN_PHONE_LENGTH: usize = 8;
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(.+)$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Contact field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    pub fn requirement(&self) -> &'static str {
        match self {
            Field::Name => "Name must not be empty",
            Field::Phone => {
                "Phone must have at least 8 characters made of digits, spaces, ( ) - and +"
            }
            Field::Email => "Email must look like name@domain, eg. someone@example.com",
        }
    }
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_phone(phone: &str) -> bool {
    phone.chars().all(is_phone_char) && phone.trim().chars().count() >= MIN_PHONE_LENGTH
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Name, then phone, then email. Only the first failing field is reported.
pub fn validate_fields(name: &str, phone: &str, email: &str) -> Result<(), AppError> {
    let checks: [(Field, bool); 3] = [
        (Field::Name, validate_name(name)),
        (Field::Phone, validate_phone(phone)),
        (Field::Email, validate_email(email)),
    ];

    match checks.iter().find(|(_, ok)| !ok) {
        Some((field, _)) => Err(AppError::InvalidArgument(format!(
            "{}: {}",
            field.label(),
            field.requirement()
        ))),
        None => Ok(()),
    }
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", " ", "   ", "\t", "\n \t"] {
            assert!(!validate_name(name), "{name:?} should be rejected");
        }

        for name in ["Ana", "a", "João Silva", " Bob "] {
            assert!(validate_name(name), "{name:?} should be accepted");
        }
    }

    #[test]
    fn short_phones_are_rejected() {
        for phone in ["", "1", "1234567", "(11)-99", "+++++++"] {
            assert!(!validate_phone(phone), "{phone:?} should be rejected");
        }
    }

    #[test]
    fn phones_with_allowed_characters_pass() {
        for phone in [
            "12345678",
            "(11) 99999-9999",
            "+55 11 4444-5555",
            "--------",
            "(((())))",
        ] {
            assert!(validate_phone(phone), "{phone:?} should be accepted");
        }
    }

    #[test]
    fn phones_with_disallowed_characters_fail() {
        for phone in ["1234567a", "(11) 9999.9999", "+55#11444455", "12345678\t"] {
            assert!(!validate_phone(phone), "{phone:?} should be rejected");
        }
    }

    #[test]
    fn phone_length_is_measured_after_trimming() {
        assert!(!validate_phone("  1234567  "));
        assert!(validate_phone(" 12345678 "));
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("a.b+1@x"));
        assert!(validate_email("joao@email.com"));
        assert!(validate_email("first_last-1@sub.example.org"));

        assert!(!validate_email("@x"));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("joao@"));
        assert!(!validate_email("jo ao@email.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn email_pattern_is_compiled_once_and_reused() {
        let first: *const Regex = &*EMAIL_RE;
        assert_eq!(EMAIL_RE.as_str(), EMAIL_PATTERN);

        for _ in 0..3 {
            assert!(validate_email("ana@x"));
        }
        assert!(std::ptr::eq(first, &*EMAIL_RE));
    }

    #[test]
    fn first_failing_field_is_reported() {
        let err = validate_fields(" ", "abc", "nope").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(format!("{err}").contains("name:"));

        let err = validate_fields("Ana", "abc", "nope").unwrap_err();
        assert!(format!("{err}").contains("phone:"));

        let err = validate_fields("Ana", "12345678", "nope").unwrap_err();
        assert!(format!("{err}").contains("email:"));

        assert!(validate_fields("Ana", "12345678", "ana@x").is_ok());
    }
}
