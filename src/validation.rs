//! Form input validation and sanitizing.
//!
//! Each check reports a [`FieldError`] whose `Display` text is the message
//! shown next to the field. Form validators collect every issue instead of
//! stopping at the first one.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;
use thiserror::Error;

use crate::classifier::classify_password_strength;
use crate::policy::{
    IDENTIFIER_MIN_LENGTH, LOGIN_PASSWORD_MIN_LENGTH, SIGN_UP_PASSWORD_MIN_LENGTH,
};
use crate::sections::measured_length;
use crate::strength::StrengthLabel;

static LETTERS_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\\-]+$").expect("letters-only pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Should be letters only.")]
    LettersOnly,
    #[error("Invalid email format.")]
    InvalidEmailFormat,
    #[error("Too short")]
    TooShort,
    #[error("Invalid email address")]
    InvalidEmailAddress,
    #[error("Invalid email or username")]
    InvalidIdentifier,
    #[error("Password too short")]
    PasswordTooShort,
    #[error("Password is too weak")]
    PasswordTooWeak,
    #[error("Too Weak")]
    LoginPasswordTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub error: FieldError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} invalid field(s)", .issues.len())]
pub struct FormErrors {
    pub issues: Vec<FieldIssue>,
}

impl FormErrors {
    /// Errors reported for one field, in check order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = FieldError> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.field == field)
            .map(|issue| issue.error)
    }

    fn from_issues(issues: Vec<FieldIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }
}

/// Outcome of [`validate_email`]: the cleaned address and its error, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCheck {
    pub cleaned: String,
    pub error: Option<FieldError>,
}

/// Accepts empty input, or input made only of ASCII letters, whitespace,
/// `\` and `-`.
pub fn validate_text(text: &str) -> Result<(), FieldError> {
    if !text.is_empty() && !LETTERS_ONLY_RE.is_match(text) {
        return Err(FieldError::LettersOnly);
    }
    Ok(())
}

/// Trims and lowercases `text`, then checks it looks like an email address.
/// An empty address is not an error.
pub fn validate_email(text: &str) -> EmailCheck {
    let cleaned = text.trim().to_lowercase();
    let error = (!cleaned.is_empty() && !EMAIL_RE.is_match(&cleaned))
        .then_some(FieldError::InvalidEmailFormat);
    EmailCheck { cleaned, error }
}

pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Keeps digits and dots. A second dot is dropped as it is typed.
pub fn sanitize_decimal_input(text: &str) -> String {
    let mut sanitized: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if sanitized.matches('.').count() > 1 {
        sanitized.pop();
    }
    sanitized
}

pub fn sanitize_integer_input(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Sign-up form fields.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut issues = Vec::new();

        if measured_length(&self.username) < IDENTIFIER_MIN_LENGTH {
            issues.push(FieldIssue {
                field: "username",
                error: FieldError::TooShort,
            });
        }

        if !is_email(&self.email) {
            issues.push(FieldIssue {
                field: "email",
                error: FieldError::InvalidEmailAddress,
            });
        }

        if measured_length(self.password.expose_secret()) < SIGN_UP_PASSWORD_MIN_LENGTH {
            issues.push(FieldIssue {
                field: "password",
                error: FieldError::PasswordTooShort,
            });
        }
        if classify_password_strength(&self.password) == StrengthLabel::Weak {
            issues.push(FieldIssue {
                field: "password",
                error: FieldError::PasswordTooWeak,
            });
        }

        FormErrors::from_issues(issues)
    }
}

/// Login form fields. `identifier` is an email address or a username.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub identifier: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut issues = Vec::new();

        if measured_length(&self.identifier) < IDENTIFIER_MIN_LENGTH {
            issues.push(FieldIssue {
                field: "identifier",
                error: FieldError::TooShort,
            });
        }
        if !is_email(&self.identifier) && !USERNAME_RE.is_match(&self.identifier) {
            issues.push(FieldIssue {
                field: "identifier",
                error: FieldError::InvalidIdentifier,
            });
        }

        if measured_length(self.password.expose_secret()) < LOGIN_PASSWORD_MIN_LENGTH {
            issues.push(FieldIssue {
                field: "password",
                error: FieldError::LoginPasswordTooShort,
            });
        }

        FormErrors::from_issues(issues)
    }
}
