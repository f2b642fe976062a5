mod session_token;
mod signing_key;

pub use session_token::{SessionClaims, SessionToken, TokenError, TokenResult};
pub use signing_key::SigningKey;
