//! Validation rules for the example form.
//!
//! Each field reports at most one error code, from the first rule it fails.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of characters in `name`
pub const NAME_MIN_LENGTH: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Submitted example form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExampleForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    MinLength,
    Invalid,
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::MinLength => "min_length",
            FieldError::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Field name to error, ordered by field name.
pub type FieldErrors = BTreeMap<&'static str, FieldError>;

impl ExampleForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(err) = validate_name(&self.name) {
            errors.insert("name", err);
        }
        if let Some(err) = validate_email(&self.email) {
            errors.insert("email", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_name(name: &str) -> Option<FieldError> {
    let len = name.chars().count();
    if len == 0 {
        Some(FieldError::Required)
    } else if len < NAME_MIN_LENGTH {
        Some(FieldError::MinLength)
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Required)
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::Invalid)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> ExampleForm {
        ExampleForm {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form("Ada", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Some(FieldError::Required));
        assert_eq!(validate_name("a"), Some(FieldError::MinLength));
        assert_eq!(validate_name("ab"), None);
        // Counted in characters, not bytes
        assert_eq!(validate_name("é"), Some(FieldError::MinLength));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Some(FieldError::Required));
        assert_eq!(validate_email("foo"), Some(FieldError::Invalid));
        assert_eq!(validate_email("foo@"), Some(FieldError::Invalid));
        assert_eq!(validate_email("foo@-example.com"), Some(FieldError::Invalid));
        assert_eq!(validate_email("user@example.com"), None);
        assert_eq!(validate_email("first.last+tag@sub.example.co"), None);
        assert_eq!(validate_email("user@localhost"), None);
    }

    #[test]
    fn test_reports_every_failing_field() {
        let errors = form("", "nope").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], FieldError::Required);
        assert_eq!(errors["email"], FieldError::Invalid);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FieldError::Required.to_string(), "required");
        assert_eq!(FieldError::MinLength.to_string(), "min_length");
        assert_eq!(
            serde_json::to_value(FieldError::Invalid).unwrap(),
            serde_json::json!("invalid")
        );
    }
}
