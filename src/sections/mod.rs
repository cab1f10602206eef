//! Password evaluation sections
//!
//! Each section checks one requirement of the `Strong` tier.

mod alphabet;
mod length;
mod variety;

pub use alphabet::{alphabet_section, contains_line_terminator, within_strong_alphabet};
pub use length::{length_section, measured_length};
pub use variety::{character_variety_section, CharacterClasses};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
