use hmac::{Hmac, Mac};

use secrecy::{ExposeSecret, Secret};

use sha2::Sha256;

/// HMAC-SHA256 key used to sign admin session tokens
#[derive(Clone)]
pub struct SigningKey(Hmac<Sha256>);

impl SigningKey {
    pub fn new(key: &Secret<String>) -> anyhow::Result<Self> {
        if key.expose_secret().is_empty() {
            anyhow::bail!("Signing key cannot be empty");
        }
        let hmac = Hmac::new_from_slice(key.expose_secret().as_bytes())?;

        Ok(Self(hmac))
    }

    pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
        self.0
            .clone()
            .chain_update(msg)
            .finalize()
            .into_bytes()
            .to_vec()
    }

    /// Constant-time check of `signature` against `msg`
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        self.0
            .clone()
            .chain_update(msg)
            .verify_slice(signature)
            .is_ok()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}
