//! Client-side inspection of JWT payloads.
//!
//! Tokens are decoded without verifying the signature. This is only meant
//! for deciding when to refresh a session and what to show in the UI; the
//! server remains the authority on whether a token is valid.

use base64::Engine as _;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Default warning window used by the session refresh logic.
pub const DEFAULT_EXPIRY_WARNING_MINUTES: u64 = 5;

/// base64url with optional padding, as found in JWT segments.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token: missing payload segment")]
    MissingPayload,
    #[error("Invalid token payload encoding: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid token payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registered claims the client reads, plus everything else in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at, seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expiration, seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    pub fn expires_at(&self) -> Option<SystemTime> {
        self.exp
            .and_then(|exp| UNIX_EPOCH.checked_add(Duration::from_secs(exp)))
    }

    /// Time left before `exp`, or `None` once it has passed.
    fn remaining_at(&self, now: SystemTime) -> Option<Duration> {
        let exp = Duration::from_secs(self.exp?);
        exp.checked_sub(since_epoch(now)).filter(|d| !d.is_zero())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenUser {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Everything the session screen shows about a token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub is_valid: bool,
    pub is_expired: bool,
    pub time_remaining: String,
    pub expires_at: Option<SystemTime>,
    pub claims: Option<Claims>,
}

/// Decodes the payload segment of `token`.
///
/// # Errors
///
/// Fails when the token has no second segment, the segment is not base64url
/// or it does not hold a JSON object with the expected claim types.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_LENIENT.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn claims_or_log(token: &str) -> Option<Claims> {
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to decode JWT: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
            None
        }
    }
}

fn since_epoch(now: SystemTime) -> Duration {
    now.duration_since(UNIX_EPOCH).unwrap_or_default()
}

/// Undecodable tokens and tokens without `exp` count as expired.
pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, SystemTime::now())
}

pub fn is_token_expired_at(token: &str, now: SystemTime) -> bool {
    claims_or_log(token).is_none_or(|claims| is_expired(&claims, now))
}

fn is_expired(claims: &Claims, now: SystemTime) -> bool {
    match claims.exp {
        Some(exp) => Duration::from_secs(exp) < since_epoch(now),
        None => true,
    }
}

pub fn token_expiration(token: &str) -> Option<SystemTime> {
    claims_or_log(token)?.expires_at()
}

/// True when the token expires within `minutes`, has already expired, or
/// cannot be read.
pub fn will_token_expire_soon(token: &str, minutes: u64) -> bool {
    will_token_expire_soon_at(token, minutes, SystemTime::now())
}

pub fn will_token_expire_soon_at(token: &str, minutes: u64, now: SystemTime) -> bool {
    let Some(claims) = claims_or_log(token) else {
        return true;
    };
    if claims.exp.is_none() {
        return true;
    }
    match claims.remaining_at(now) {
        Some(remaining) => remaining <= Duration::from_secs(minutes.saturating_mul(SECS_PER_MINUTE)),
        None => true,
    }
}

/// Human readable time left, e.g. `"2 days, 3 hours"`.
pub fn token_time_remaining(token: &str) -> String {
    token_time_remaining_at(token, SystemTime::now())
}

pub fn token_time_remaining_at(token: &str, now: SystemTime) -> String {
    match claims_or_log(token) {
        Some(claims) => describe_remaining(&claims, now),
        None => "Invalid token".to_string(),
    }
}

fn describe_remaining(claims: &Claims, now: SystemTime) -> String {
    if claims.exp.is_none() {
        return "Invalid token".to_string();
    }
    let Some(remaining) = claims.remaining_at(now) else {
        return "Expired".to_string();
    };

    let secs = remaining.as_secs();
    let days = secs / SECS_PER_DAY;
    let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    if days > 0 {
        format!("{} days, {} hours", days, hours)
    } else if hours > 0 {
        format!("{} hours, {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}

/// The user a token was issued for. `None` if the token has no `sub`.
pub fn user_from_token(token: &str) -> Option<TokenUser> {
    let claims = claims_or_log(token)?;
    Some(TokenUser {
        id: claims.sub?,
        email: claims.email,
        name: claims.name,
    })
}

pub fn inspect_token(token: &str) -> TokenInfo {
    inspect_token_at(token, SystemTime::now())
}

pub fn inspect_token_at(token: &str, now: SystemTime) -> TokenInfo {
    match claims_or_log(token) {
        Some(claims) => TokenInfo {
            is_valid: true,
            is_expired: is_expired(&claims, now),
            time_remaining: describe_remaining(&claims, now),
            expires_at: claims.expires_at(),
            claims: Some(claims),
        },
        None => TokenInfo {
            is_valid: false,
            is_expired: true,
            time_remaining: "Invalid token".to_string(),
            expires_at: None,
            claims: None,
        },
    }
}
