//! Startup configuration.
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `sundial.toml` in the working directory, if present
//! 3. `SUNDIAL_*` environment variables (`SUNDIAL_LISTEN_ADDR`, `SUNDIAL_SHELL`, ...)
//! 4. `FLASK_*` environment variables (`FLASK_API_KEY`)

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use subtle::ConstantTimeEq;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Default allowed CORS origin: the development front-end.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default per-command timeout in seconds.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 10;

const CONFIG_FILE: &str = "sundial";

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// `listen_addr` is not a socket address.
    #[error("invalid listen address '{value}': {source}")]
    ListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// `cors_origin` is not a valid header value.
    #[error("invalid CORS origin '{0}'")]
    CorsOrigin(String),

    /// `command_timeout_secs` is zero.
    #[error("command timeout must be at least one second")]
    CommandTimeout,

    /// `shell` is empty.
    #[error("shell must not be empty")]
    Shell,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    listen_addr: String,
    cors_origin: String,
    command_timeout_secs: u64,
    shell: String,
    #[serde(default)]
    api_key: Option<String>,
}

/// Validated gateway configuration, immutable for the process lifetime.
#[derive(Debug)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// The single origin allowed by CORS.
    pub cors_origin: HeaderValue,
    /// Upper bound on each command execution.
    pub command_timeout: Duration,
    /// Shell binary that runs the fixed command scripts.
    pub shell: PathBuf,
    api_key: Option<SecretString>,
}

impl GatewayConfig {
    /// Load configuration from the file and process environment.
    ///
    /// # Errors
    /// Returns [`SettingsError`] if a source is malformed or a value fails
    /// validation.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(None)
    }

    /// Load configuration, reading environment variables from `env` instead
    /// of the process environment when it is `Some`.
    ///
    /// # Errors
    /// Same as [`GatewayConfig::load`].
    pub fn load_from(env: Option<config::Map<String, String>>) -> Result<Self, SettingsError> {
        let raw: RawSettings = config::Config::builder()
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
            .set_default("command_timeout_secs", DEFAULT_COMMAND_TIMEOUT_SECS)?
            .set_default("shell", sundial_executor::DEFAULT_SHELL)?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix("SUNDIAL")
                    .try_parsing(true)
                    .source(env.clone()),
            )
            .add_source(config::Environment::with_prefix("FLASK").source(env))
            .build()?
            .try_deserialize()?;

        Self::validate(raw)
    }

    /// Build a configuration directly, for embedding and tests.
    #[must_use]
    pub fn new(listen_addr: SocketAddr, cors_origin: HeaderValue, api_key: Option<&str>) -> Self {
        Self {
            listen_addr,
            cors_origin,
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            shell: PathBuf::from(sundial_executor::DEFAULT_SHELL),
            api_key: non_empty_secret(api_key.map(str::to_owned)),
        }
    }

    fn validate(raw: RawSettings) -> Result<Self, SettingsError> {
        let listen_addr = raw
            .listen_addr
            .parse()
            .map_err(|source| SettingsError::ListenAddr { value: raw.listen_addr.clone(), source })?;
        let cors_origin = HeaderValue::from_str(&raw.cors_origin)
            .map_err(|_| SettingsError::CorsOrigin(raw.cors_origin.clone()))?;
        if raw.command_timeout_secs == 0 {
            return Err(SettingsError::CommandTimeout);
        }
        if raw.shell.is_empty() {
            return Err(SettingsError::Shell);
        }

        Ok(Self {
            listen_addr,
            cors_origin,
            command_timeout: Duration::from_secs(raw.command_timeout_secs),
            shell: PathBuf::from(raw.shell),
            api_key: non_empty_secret(raw.api_key),
        })
    }

    /// Return `true` if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check a presented API key against the configured secret.
    ///
    /// The comparison is constant time in the key contents. A missing
    /// presented key or an unset secret is never authorized.
    #[must_use]
    pub fn authorize(&self, presented: Option<&str>) -> bool {
        match (presented, &self.api_key) {
            (Some(presented), Some(secret)) => presented
                .as_bytes()
                .ct_eq(secret.expose_secret().as_bytes())
                .into(),
            _ => false,
        }
    }
}

fn non_empty_secret(key: Option<String>) -> Option<SecretString> {
    key.filter(|k| !k.is_empty()).map(SecretString::from)
}
