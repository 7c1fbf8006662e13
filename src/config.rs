use crate::{ResolverError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "logs";
pub const DEFAULT_DATACENTERS: [&str; 4] = ["IL", "FR", "SY", "CH"];

/// Optional settings file. Every field falls back to its default.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Append-only debug log.
    pub log_file: PathBuf,
    /// Region codes offered when `--show` is given without `--dc`.
    pub datacenters: Vec<String>,
    /// Restrict pod lookups to the `--namespace` value.
    pub filter_namespace: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            datacenters: DEFAULT_DATACENTERS.iter().map(|s| s.to_string()).collect(),
            filter_namespace: false,
        }
    }
}

impl ResolverConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ResolverError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&contents).map_err(|e| match e {
            ResolverError::ConfigError(msg) => {
                ResolverError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // an empty document means "all defaults"
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(contents).map_err(|e| ResolverError::ConfigError(e.to_string()))
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
