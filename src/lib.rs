//! Input helpers for the pond monitor client
//!
//! This library classifies password strength, encodes text as base64 and
//! validates the sign-up, login and device pairing inputs.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pond_input::{classify_password_strength, decode_text, encode_text, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef1!".to_string().into());
//! assert_eq!(classify_password_strength(&password), StrengthLabel::Strong);
//!
//! let encoded = encode_text("hello");
//! assert_eq!(encoded, "aGVsbG8=");
//! assert_eq!(decode_text(&encoded).unwrap(), "hello");
//! ```

// Internal modules
mod classifier;
mod codec;
mod sections;
mod strength;

// Public modules
pub mod mac;
pub mod policy;
pub mod token;
pub mod validation;

// Public API
pub use classifier::{classify_password_strength, evaluate_password, tally_password_strength};
pub use codec::{decode_text, encode_text, DecodingError};
pub use strength::{PasswordEvaluation, StrengthLabel};
pub use validation::{FieldError, FieldIssue, FormErrors, LoginForm, SignUpForm};

#[cfg(feature = "async")]
pub use classifier::{evaluate_password_tx, EVALUATION_DEBOUNCE};
