//! Error types for layerform
//!
//! Each port carries its own `thiserror` enum; `LayerformError` collects them
//! for use cases that cross ports.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DefinitionsError, InstancesError};

/// Result type alias for layerform operations
pub type LayerformResult<T> = Result<T, LayerformError>;

/// Main error type for layerform operations
#[derive(Error, Debug)]
pub enum LayerformError {
    /// Definition store failure (missing layer, unreadable or unwritable file)
    #[error(transparent)]
    Definitions(#[from] DefinitionsError),

    /// Instance registry failure
    #[error(transparent)]
    Registry(#[from] InstancesError),

    /// Another live instance is built on top of this one
    #[error("instance '{instance}' of layer '{layer}' has dependants and cannot be removed")]
    HasDependants { layer: String, instance: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Definitions document given to `configure` could not be parsed
    #[error("invalid definitions document {file}: {source}")]
    InvalidDocument {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
