//! Configuration management for the site-gate server
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`,
//! then `SITE_GATE_*` environment variables. Everything here is read once at
//! startup. Per-site secrets are NOT part of this structure; they are resolved
//! on every request through a [`crate::auth::SecretSource`].

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::collections::HashSet;

/// Config file locations, tried in order
const CONFIG_PATHS: [&str; 2] = [
    "site-gate/config", // container layout: /app/site-gate/config.toml
    "config",           // local development: ./config.toml
];

const ENV_PREFIX: &str = "SITE_GATE";

/// How the candidate password is compared with the configured secret.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// Configured value is the hex SHA-256 digest of the password
    #[default]
    Hashed,
    /// Configured value is the password itself
    Plaintext,
}

/// Which HTTP status codes failures are reported with.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Every handled outcome is 200
    #[default]
    Uniform,
    /// 400 for bad requests, 500 for server-side failures, 200 otherwise
    Detailed,
}

/// An extra site declared under `[[sites]]`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub key: String,
    pub credential_ref: String,
    #[serde(default)]
    pub target_ref: Option<String>,
}

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Path of the verification endpoint
    pub route: String,

    /// Secret comparison mode, one per deployment
    pub mode: CompareMode,

    /// Status code policy for failed verifications
    pub status_policy: StatusPolicy,

    /// Byte cap for both site key and password
    pub max_input_length: usize,

    /// Sites added on top of the built-in table
    #[serde(default)]
    pub sites: Vec<SiteConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8788,
            route: "/api/verify".to_string(),
            mode: CompareMode::Hashed,
            status_policy: StatusPolicy::Uniform,
            max_input_length: 1024,
            sites: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml (if any) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Self::defaults()?;
        for path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        Self::finish(builder)
    }

    /// Load configuration from an in-memory TOML document on top of the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let d = ServerConfig::default();
        Config::builder()
            .set_default("bind_address", d.bind_address)?
            .set_default("port", d.port as i64)?
            .set_default("route", d.route)?
            .set_default("mode", "hashed")?
            .set_default("status_policy", "uniform")?
            .set_default("max_input_length", d.max_input_length as i64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.max_input_length == 0 {
            return Err(config::ConfigError::Message(
                "max_input_length must be greater than 0".into(),
            ));
        }

        if !self.route.starts_with('/') {
            return Err(config::ConfigError::Message(format!(
                "route must start with '/': {}",
                self.route
            )));
        }

        let mut seen = HashSet::new();
        for site in &self.sites {
            if site.key.is_empty() || site.credential_ref.is_empty() {
                return Err(config::ConfigError::Message(
                    "sites entries need a non-empty key and credential_ref".into(),
                ));
            }
            if !seen.insert(site.key.as_str()) {
                return Err(config::ConfigError::Message(format!(
                    "duplicate site key in config: {}",
                    site.key
                )));
            }
        }

        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
