//! Fixed password policy values shared by the classifier and the form validators.

/// Minimum length for the `Strong` tier.
pub const STRONG_MIN_LENGTH: usize = 8;

/// Minimum length for the `Medium` tier.
pub const MEDIUM_MIN_LENGTH: usize = 6;

/// Symbols that count towards the `Strong` tier. They are also the only
/// non-alphanumeric characters a `Strong` password may contain.
pub const STRONG_SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// Minimum length criterion of the criteria tally.
pub const TALLY_MIN_LENGTH: usize = 8;

/// Minimum password length accepted by the sign-up form.
pub const SIGN_UP_PASSWORD_MIN_LENGTH: usize = 6;

/// Minimum password length accepted by the login form.
pub const LOGIN_PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum length of usernames and login identifiers.
pub const IDENTIFIER_MIN_LENGTH: usize = 3;
