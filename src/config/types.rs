//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LayerformResult;
use crate::infrastructure::fs::layerform_home_dir;
use crate::infrastructure::repositories::{DEFINITIONS_FILE_NAME, INSTANCES_FILE_NAME};

use super::loader::{self, ConfigWarning};

/// Where the definition store and instance registry live.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub definitions: Option<PathBuf>,

    #[serde(default)]
    pub instances: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `layerform=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file, discarding unknown-key warnings.
    pub fn load(path: &Path) -> LayerformResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LayerformResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `LAYERFORM_*` environment overrides.
    pub fn discover(project_root: Option<&Path>) -> LayerformResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    pub fn definitions_path(&self) -> PathBuf {
        self.storage
            .definitions
            .clone()
            .unwrap_or_else(|| default_storage_dir().join(DEFINITIONS_FILE_NAME))
    }

    pub fn instances_path(&self) -> PathBuf {
        self.storage
            .instances
            .clone()
            .unwrap_or_else(|| default_storage_dir().join(INSTANCES_FILE_NAME))
    }
}

/// `~/.layerform`, or `.layerform` in the working directory when no home
/// directory can be determined.
pub fn default_storage_dir() -> PathBuf {
    layerform_home_dir()
        .map(|h| h.join(".layerform"))
        .unwrap_or_else(|| PathBuf::from(".layerform"))
}
