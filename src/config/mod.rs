//! Configuration module for layerform
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAYERFORM_*)
//! 3. Project config (.layerform/config.toml)
//! 4. User config (~/.config/layerform/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    with_env_overrides, ConfigWarning, DEFINITIONS_PATH_ENV, INSTANCES_PATH_ENV, LOG_ENV,
};
pub use types::{default_storage_dir, Config, LogConfig, StorageConfig};
