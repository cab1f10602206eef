//! Length section - checks the `Strong` tier minimum length.

use crate::policy::STRONG_MIN_LENGTH;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Length of `text` as counted by the mobile client: UTF-16 code units.
///
/// Equal to the character count for ASCII input.
pub fn measured_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Checks if the password meets the `Strong` tier length.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if measured_length(password.expose_secret()) < STRONG_MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            STRONG_MIN_LENGTH
        ));
    }
    None
}
