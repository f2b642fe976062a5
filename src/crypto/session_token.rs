use std::fmt;
use std::str::FromStr;

use base64::{
    alphabet,
    engine::{self, general_purpose},
    Engine as _,
};

use chrono::{DateTime, Duration, TimeZone, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use super::SigningKey;

lazy_static::lazy_static! {
    // Cookie-safe base64 engine
    static ref BASE64_ENGINE: engine::GeneralPurpose =
        engine::GeneralPurpose::new(&alphabet::URL_SAFE, general_purpose::NO_PAD);
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token signature does not match")]
    SignatureMismatch,
    #[error("Token is expired")]
    Expired,
    #[error("Failed to decode or encode token")]
    DecodeEncodeError,
}

impl From<serde_json::Error> for TokenError {
    fn from(_e: serde_json::Error) -> Self {
        Self::DecodeEncodeError
    }
}

impl From<base64::DecodeError> for TokenError {
    fn from(_e: base64::DecodeError) -> Self {
        Self::DecodeEncodeError
    }
}

pub type TokenResult<T> = Result<T, TokenError>;

/// Payload carried by an admin session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Distinguishes tokens issued within the same second
    pub sid: Uuid,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

impl SessionClaims {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        // Ambiguous or invalid timestamps resolve to the earliest candidate
        Utc.timestamp_opt(self.exp, 0).earliest()
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at().map(|exp| Utc::now() >= exp).unwrap_or(true)
    }
}

/// Signed session token, `base64(claims).base64(signature)`
#[derive(Clone, PartialEq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issue a token that stays valid for `ttl`
    pub fn issue(key: &SigningKey, ttl: Duration) -> TokenResult<Self> {
        let claims = SessionClaims {
            sid: Uuid::new_v4(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        Self::sign(key, &claims)
    }

    fn sign(key: &SigningKey, claims: &SessionClaims) -> TokenResult<Self> {
        let msg = serde_json::to_vec(claims)?;
        let sig = key.sign(&msg);

        Ok(Self(format!(
            "{}.{}",
            BASE64_ENGINE.encode(msg),
            BASE64_ENGINE.encode(sig)
        )))
    }

    /// Check the signature and expiry, returning the claims of a valid token
    pub fn verify(&self, key: &SigningKey) -> TokenResult<SessionClaims> {
        let (msg, sig) = self
            .0
            .split_once('.')
            .ok_or(TokenError::DecodeEncodeError)?;
        let msg = BASE64_ENGINE.decode(msg)?;
        let sig = BASE64_ENGINE.decode(sig)?;

        if !key.verify(&msg, &sig) {
            return Err(TokenError::SignatureMismatch);
        }

        let claims: SessionClaims = serde_json::from_slice(&msg)?;
        if claims.is_expired() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SessionToken {
    type Err = TokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(Self(token.to_string()))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}
