//! Password strength classifier and evaluator.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{MEDIUM_MIN_LENGTH, STRONG_MIN_LENGTH, TALLY_MIN_LENGTH};
use crate::sections::{
    alphabet_section, character_variety_section, contains_line_terminator, length_section,
    measured_length, within_strong_alphabet, CharacterClasses, SectionResult,
};
use crate::strength::{PasswordEvaluation, StrengthLabel};

/// Keystroke debounce applied by [`evaluate_password_tx`].
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Classifies a password into exactly one [`StrengthLabel`].
///
/// Tiers are checked in order and the first match wins:
///
/// 1. `Strong`: lowercase, uppercase, digit and one of `@$!%*?&`, nothing
///    outside `[A-Za-z0-9@$!%*?&]`, at least 8 long.
/// 2. `Medium`: lowercase, uppercase and digit, at least 6 long, no line
///    terminators. Any other characters are allowed.
/// 3. `Weak`: everything else, including the empty string.
///
/// Lengths are counted in UTF-16 code units.
pub fn classify_password_strength(password: &SecretString) -> StrengthLabel {
    let pwd = password.expose_secret();
    let classes = CharacterClasses::scan(pwd);
    let len = measured_length(pwd);

    if classes.has_mixed_alphanumerics()
        && classes.symbol
        && within_strong_alphabet(pwd)
        && len >= STRONG_MIN_LENGTH
    {
        return StrengthLabel::Strong;
    }

    if classes.has_mixed_alphanumerics()
        && len >= MEDIUM_MIN_LENGTH
        && !contains_line_terminator(pwd)
    {
        return StrengthLabel::Medium;
    }

    StrengthLabel::Weak
}

/// Classifies by counting satisfied criteria instead of checking tiers.
///
/// Criteria: a digit, an uppercase letter, a lowercase letter, any
/// character that is not an ASCII letter or digit, and a length of at
/// least 8. All five give `Strong`, three or four give `Medium`.
pub fn tally_password_strength(password: &SecretString) -> StrengthLabel {
    let pwd = password.expose_secret();
    let classes = CharacterClasses::scan(pwd);

    let satisfied = [
        classes.digit,
        classes.uppercase,
        classes.lowercase,
        classes.other,
        measured_length(pwd) >= TALLY_MIN_LENGTH,
    ]
    .iter()
    .filter(|&&met| met)
    .count();

    match satisfied {
        5 => StrengthLabel::Strong,
        3 | 4 => StrengthLabel::Medium,
        _ => StrengthLabel::Weak,
    }
}

/// Evaluates a password and explains what keeps it below `Strong`.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` with the label and one reason per failed section.
/// A cancelled evaluation has no label.
pub fn evaluate_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut reasons = Vec::new();

    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("alphabet", alphabet_section),
    ];

    for (section_name, section_fn) in sections {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                reasons.push("Evaluation cancelled".to_string());
                return PasswordEvaluation {
                    label: None,
                    reasons,
                };
            }
        }

        if let Some(reason) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = section_name, "password section not satisfied");
            reasons.push(reason);
        }

        #[cfg(not(feature = "tracing"))]
        let _ = section_name;
    }

    PasswordEvaluation {
        label: Some(classify_password_strength(password)),
        reasons,
    }
}

/// Debounces, evaluates and sends the result on `tx`.
///
/// Meant to be spawned per keystroke; cancel `token` when a newer keystroke
/// arrives.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let evaluation = evaluate_password(password, Some(token));

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn classify(s: &str) -> StrengthLabel {
        classify_password_strength(&secret(s))
    }

    fn evaluate(s: &str) -> PasswordEvaluation {
        #[cfg(feature = "async")]
        let evaluation = evaluate_password(&secret(s), None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password(&secret(s));

        evaluation
    }

    #[test]
    fn test_classify_strong_at_minimum_length() {
        assert_eq!(classify("Abcdef1!"), StrengthLabel::Strong);
        assert_eq!(classify("P@ssw0rd2024&?"), StrengthLabel::Strong);
    }

    #[test]
    fn test_classify_seven_chars_with_symbol_is_medium() {
        assert_eq!(classify("Abcde1!"), StrengthLabel::Medium);
        assert_eq!(classify("Abcdef1"), StrengthLabel::Medium);
    }

    #[test]
    fn test_classify_symbol_outside_set_falls_to_medium() {
        assert_eq!(classify("Abcdef1#"), StrengthLabel::Medium);
        assert_eq!(classify("Abc def 1 ~"), StrengthLabel::Medium);
    }

    #[test]
    fn test_classify_medium_without_symbol() {
        assert_eq!(classify("Abc123"), StrengthLabel::Medium);
        assert_eq!(classify("LongerPassword123"), StrengthLabel::Medium);
    }

    #[test]
    fn test_classify_weak_cases() {
        assert_eq!(classify(""), StrengthLabel::Weak);
        assert_eq!(classify("abcdefgh"), StrengthLabel::Weak);
        assert_eq!(classify("12345678"), StrengthLabel::Weak);
        assert_eq!(classify("ABCDEFGH1!"), StrengthLabel::Weak);
        assert_eq!(classify("Abc12"), StrengthLabel::Weak);
        assert_eq!(classify("abcdef1!"), StrengthLabel::Weak);
    }

    #[test]
    fn test_classify_line_terminator_blocks_medium() {
        assert_eq!(classify("Abcdef1\n"), StrengthLabel::Weak);
        assert_eq!(classify("Abc\r1234"), StrengthLabel::Weak);
    }

    #[test]
    fn test_classify_length_counts_utf16_units() {
        // 3 ASCII chars + 2 surrogate pairs = 7 UTF-16 units
        assert_eq!(classify("Ab1\u{1F331}\u{1F331}"), StrengthLabel::Medium);
        // 5 chars, all in the BMP
        assert_eq!(classify("Ab1éé"), StrengthLabel::Weak);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for pwd in ["", "Abcdef1!", "Abcdef1", "abcdefgh"] {
            assert_eq!(classify(pwd), classify(pwd));
        }
    }

    #[test]
    fn test_tally_levels() {
        assert_eq!(tally_password_strength(&secret("Abcdef1#")), StrengthLabel::Strong);
        assert_eq!(tally_password_strength(&secret("Abcdef1")), StrengthLabel::Medium);
        assert_eq!(tally_password_strength(&secret("abcdefgh")), StrengthLabel::Weak);
        assert_eq!(tally_password_strength(&secret("")), StrengthLabel::Weak);
        // digit, lowercase, long enough
        assert_eq!(tally_password_strength(&secret("abcdefg1")), StrengthLabel::Medium);
    }

    #[test]
    fn test_evaluate_strong_has_no_reasons() {
        let evaluation = evaluate("Abcdef1!");
        assert_eq!(evaluation.label, Some(StrengthLabel::Strong));
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_medium_explains_gap() {
        let evaluation = evaluate("Abcdef1");
        assert_eq!(evaluation.label, Some(StrengthLabel::Medium));
        assert_eq!(evaluation.reasons.len(), 2);
        assert!(evaluation.reasons[0].contains("at least 8"));
        assert!(evaluation.reasons[1].contains("special"));
    }

    #[test]
    fn test_evaluate_reports_disallowed_characters() {
        let evaluation = evaluate("Abcdef1!#");
        assert_eq!(evaluation.label, Some(StrengthLabel::Medium));
        assert_eq!(evaluation.reasons.len(), 1);
        assert!(evaluation.reasons[0].contains("@$!%*?&"));
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.label, Some(StrengthLabel::Weak));
        assert_eq!(evaluation.reasons.len(), 2);
        assert!(!evaluation.is_cancelled());
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let evaluation = evaluate_password(&secret("SomePassword123!"), Some(token));

        assert!(evaluation.is_cancelled());
        assert_eq!(evaluation.reasons, vec!["Evaluation cancelled".to_string()]);
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let evaluation = evaluate_password(&secret("TestPass123!"), Some(token));

        assert_eq!(evaluation.label, Some(StrengthLabel::Strong));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&secret("TestPass123"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.label, Some(StrengthLabel::Medium));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // must return without panicking
        evaluate_password_tx(&secret("TestPass123!"), CancellationToken::new(), tx).await;
    }
}
