//! Configuration - user preferences loaded from YAML

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "GDM_CONFIG";

/// Output serialization for rendered documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    #[diagnostic(code(gdm::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    #[diagnostic(code(gdm::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format used by `show` and `status` when none is given
    pub output_format: DocumentFormat,

    /// Fail validation for documents whose kind cannot be determined
    pub strict: bool,

    /// Default tracing filter (overridden by RUST_LOG and -v)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: DocumentFormat::default(),
            strict: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// Lookup order: the explicit path, then `$GDM_CONFIG`, then
    /// `<user config dir>/gdm/config.yaml`. A missing default file yields the
    /// defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from YAML text; an empty document means defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content)
    }

    /// Per-user config file location
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gdm")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}
