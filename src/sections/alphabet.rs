//! Alphabet section - restricts `Strong` passwords to letters, digits and the fixed symbols.

use crate::policy::STRONG_SYMBOLS;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub fn within_strong_alphabet(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || STRONG_SYMBOLS.contains(&c))
}

/// Line terminators never match the client's `.` pattern, which keeps a
/// password containing one out of the `Medium` tier.
pub fn contains_line_terminator(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// Checks that every character is allowed in a `Strong` password.
///
/// # Returns
/// - `Some(reason)` if a disallowed character is present
/// - `None` otherwise
pub fn alphabet_section(password: &SecretString) -> SectionResult {
    if !within_strong_alphabet(password.expose_secret()) {
        return Some(
            "Only letters, numbers and @$!%*?& are allowed in a strong password".to_string(),
        );
    }
    None
}
