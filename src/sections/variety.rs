//! Character variety section - checks for lowercase, uppercase, digits and symbols.

use crate::policy::STRONG_SYMBOLS;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Which character classes occur in a password.
///
/// Letters and digits are ASCII only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    /// One of [`STRONG_SYMBOLS`].
    pub symbol: bool,
    /// Anything that is not an ASCII letter or digit.
    pub other: bool,
}

impl CharacterClasses {
    pub fn scan(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut classes, c| {
            match c {
                'a'..='z' => classes.lowercase = true,
                'A'..='Z' => classes.uppercase = true,
                '0'..='9' => classes.digit = true,
                _ => {
                    classes.other = true;
                    if STRONG_SYMBOLS.contains(&c) {
                        classes.symbol = true;
                    }
                }
            }
            classes
        })
    }

    /// Lowercase, uppercase and digit are all present.
    pub fn has_mixed_alphanumerics(&self) -> bool {
        self.lowercase && self.uppercase && self.digit
    }
}

/// Checks if the password contains every class the `Strong` tier needs.
///
/// # Returns
/// - `Some(reason)` naming the missing classes
/// - `None` if all classes are present
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let classes = CharacterClasses::scan(password.expose_secret());

    let missing: Vec<_> = [
        (!classes.lowercase).then_some("lowercase"),
        (!classes.uppercase).then_some("uppercase"),
        (!classes.digit).then_some("numbers"),
        (!classes.symbol).then_some("special characters (@$!%*?&)"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
