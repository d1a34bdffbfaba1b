use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use crate::store::DEFAULT_NAMESPACE;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::{data_dir, home_dir};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one the default location
    /// is tried and built-in defaults are used if nothing is there.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    tracing::debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(Self::defaults());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(path, &cf)
    }

    /// Configuration used when no config file exists.
    #[must_use]
    pub fn defaults() -> ResolvedConfig {
        ResolvedConfig {
            source: None,
            store_path: default_store_path(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            logging: LoggingConfig::default(),
        }
    }

    fn resolve(source: PathBuf, cf: &ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let store_path = match &cf.store.path {
            Some(p) => expand_path(p)?,
            None => default_store_path(),
        };
        let namespace =
            cf.store.namespace.clone().unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig { source: Some(source), store_path, namespace, logging })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("easy-templates").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("easy-templates").join("config.toml")
}

/// Default variable store: `<data dir>/easy-templates/variables.json`.
pub fn default_store_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        return Path::new(&xdg).join("easy-templates").join("variables.json");
    }
    let base = data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("easy-templates").join("variables.json")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
