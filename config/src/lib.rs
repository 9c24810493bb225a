//! Configuration for precond.
//!
//! Only the format checks have tunables. Everything is optional: a missing file,
//! section, or key means "use the built-in default".
//!
//! ```toml
//! [regex]
//! size_limit = 1048576
//!
//! [datetime]
//! format = "%Y-%m-%d %H:%M:%S%.f"
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Overrides the default config location when set.
pub const CONFIG_PATH_ENV: &str = "PRECOND_CONFIG";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PrecondConfig {
    pub regex: Option<RegexConfig>,
    pub datetime: Option<DateTimeConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RegexConfig {
    /// Upper bound, in bytes, on a compiled pattern.
    pub size_limit: Option<usize>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct DateTimeConfig {
    /// `strftime` format used to render and re-parse date/time values.
    pub format: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PrecondConfig {
    /// Loads the user config, logging and swallowing any failure.
    ///
    /// Returns `None` when no config file exists or it cannot be used.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, err);
                None
            }
        }
    }

    /// Loads config from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map(Some)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn regex_size_limit(&self) -> Option<usize> {
        self.regex.as_ref().and_then(|r| r.size_limit)
    }

    #[must_use]
    pub fn datetime_format(&self) -> Option<&str> {
        self.datetime.as_ref().and_then(|d| d.format.as_deref())
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".precond").join("config.toml"))
}
