//! Settings and logging for the Frosmo segments app.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! TOML file, then `FROSMO_`-prefixed environment variables (nested keys
//! split on `__`, e.g. `FROSMO_API__TIMEOUT_SECS`). Connection parameters
//! (token, region, site) are not settings: the host platform owns them.

use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use frosmo_api::TransportConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP transport tuning for the Graniitti client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Per-request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Overrides the default `User-Agent`.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ApiSettings {
    pub fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..TransportConfig::default()
        };
        if let Some(ref agent) = self.user_agent {
            transport.user_agent.clone_from(agent);
        }
        transport
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".into()
}

impl Settings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Validation {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.api.user_agent.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Validation {
                field: "api.user_agent".into(),
                reason: "must not be empty".into(),
            });
        }
        EnvFilter::try_new(&self.logging.filter).map_err(|e| ConfigError::Validation {
            field: "logging.filter".into(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings from defaults, `path` (if given), and the environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));
    if let Some(path) = path {
        figment = figment.merge(Toml::file(path));
    }
    figment = figment.merge(Env::prefixed("FROSMO_").split("__"));

    let settings: Settings = figment.extract()?;
    settings.validate()?;
    Ok(settings)
}

// ── Logging ─────────────────────────────────────────────────────────

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured filter.
pub fn init_tracing(logging: &LoggingSettings) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
