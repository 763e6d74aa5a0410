//! Configuration for Ferrule.
//!
//! Settings live in `~/.ferrule/config.toml`:
//!
//! ```toml
//! [tasks]
//! default_timeout_ms = 5000
//! ```
//!
//! Every field is optional. `FERRULE_DEFAULT_TIMEOUT_MS` overrides the file.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const TIMEOUT_ENV_VAR: &str = "FERRULE_DEFAULT_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FerruleConfig {
    pub tasks: TaskConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Timeout applied by `with_default_timeout`, in milliseconds.
    pub default_timeout_ms: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TaskConfig {
    /// Effective default timeout: the environment override if set, else the configured value.
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        env_timeout_override().unwrap_or(Duration::from_millis(self.default_timeout_ms))
    }
}

impl FerruleConfig {
    /// Load from the default path, falling back to defaults when the file is
    /// missing or unusable.
    #[must_use]
    pub fn load() -> Self {
        config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load from `path` with the same fallbacks as [`load`](Self::load).
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks.default_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "tasks.default_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ferrule").join("config.toml"))
}

fn env_timeout_override() -> Option<Duration> {
    static OVERRIDE: OnceLock<Option<Duration>> = OnceLock::new();
    *OVERRIDE.get_or_init(|| parse_timeout_ms(env::var(TIMEOUT_ENV_VAR).ok().as_deref()))
}

fn parse_timeout_ms(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_millis)
}
