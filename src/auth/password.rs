use anyhow::Context;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use secrecy::{ExposeSecret, Secret};

/// The configured admin password, kept only as an argon2 hash in memory
#[derive(Debug, Clone)]
pub struct AdminPassword {
    password_hash: Secret<String>,
}

impl AdminPassword {
    /// Hash the operator supplied password once at startup
    pub fn new(password: &Secret<String>) -> anyhow::Result<Self> {
        if password.expose_secret().is_empty() {
            anyhow::bail!("Admin password cannot be empty");
        }

        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = Argon2::default()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .context("Failed to hash admin password")?
            .to_string();

        Ok(Self {
            password_hash: Secret::new(password_hash),
        })
    }

    /// Check a login attempt. CPU heavy: run off the async workers.
    #[tracing::instrument("Verify admin password", skip_all)]
    pub fn verify(&self, candidate: &Secret<String>) -> anyhow::Result<()> {
        let password_hash = PasswordHash::new(self.password_hash.expose_secret())
            .context("Failed to parse stored password hash")?;

        Argon2::default()
            .verify_password(candidate.expose_secret().as_bytes(), &password_hash)
            .context("Incorrect password")
    }
}
