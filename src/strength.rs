//! Strength label and evaluation result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of password classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Hex colour of the strength meter for this label.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#F77979",
            StrengthLabel::Medium => "#F2BC79",
            StrengthLabel::Strong => "#A6F98D",
        }
    }

    /// How much of the strength meter is filled, in percent.
    pub fn meter_percent(self) -> u8 {
        match self {
            StrengthLabel::Weak => 25,
            StrengthLabel::Medium => 66,
            StrengthLabel::Strong => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`evaluate_password`](crate::evaluate_password).
///
/// `label` is `None` only when the evaluation was cancelled before it
/// finished. `reasons` lists what keeps the password below `Strong`, in
/// section order; it is empty for a `Strong` password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEvaluation {
    pub label: Option<StrengthLabel>,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn is_cancelled(&self) -> bool {
        self.label.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_label_name() {
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_meter_presentation() {
        assert_eq!(StrengthLabel::Weak.color(), "#F77979");
        assert_eq!(StrengthLabel::Medium.color(), "#F2BC79");
        assert_eq!(StrengthLabel::Strong.color(), "#A6F98D");

        assert!(StrengthLabel::Weak.meter_percent() < StrengthLabel::Medium.meter_percent());
        assert_eq!(StrengthLabel::Strong.meter_percent(), 100);
    }

    #[test]
    fn test_serializes_as_variant_name() {
        let json = serde_json::to_string(&StrengthLabel::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }
}
