use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use config::{Config, Environment, File};

use secrecy::Secret;

use serde::Deserialize;
use serde_aux::prelude::*;

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub admin: AdminSettings,
    pub store: StoreSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }

    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        let settings: Self = Config::builder()
            .add_source(File::from(base_path.join("base")).required(true))
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // NOTE: Should be used for any prod secrets. Takes the form `APP_<settings category>__<setting name>`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")?;

        settings.app.validate()?;
        Ok(settings)
    }
}

/// Upper bound on `app.session_ttl_hours`, one year
const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

fn default_session_ttl_hours() -> i64 {
    24
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,

    secret_key: Secret<String>,
    #[serde(
        default = "default_session_ttl_hours",
        deserialize_with = "deserialize_number_from_string"
    )]
    session_ttl_hours: i64,
}

impl ApplicationSettings {
    fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            anyhow::bail!(
                "app.session_ttl_hours must be between 1 and {}, got {}",
                MAX_SESSION_TTL_HOURS,
                self.session_ttl_hours
            );
        }
        Ok(())
    }

    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
    /// The key admin session cookies are signed with
    pub fn secret_key(&self) -> &Secret<String> {
        &self.secret_key
    }
    /// How long an admin stays logged in
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminSettings {
    password: Secret<String>,
}

impl AdminSettings {
    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    path: PathBuf,
}

impl StoreSettings {
    /// Location of the JSON file holding every submission
    pub fn path(&self) -> &Path {
        &self.path
    }
}
