//! InstancesBackend port
//!
//! Read access to the registry of deployed layer instances.

use std::path::PathBuf;

use crate::domain::entities::LayerInstance;

pub type InstancesResult<T> = Result<T, InstancesError>;

pub trait InstancesBackend {
    fn list_instances(&self) -> InstancesResult<Vec<LayerInstance>>;

    /// Live instances of the definition named `layer_name`.
    fn list_instances_by_layer(&self, layer_name: &str) -> InstancesResult<Vec<LayerInstance>>;
}

#[derive(Debug, thiserror::Error)]
pub enum InstancesError {
    #[error("layer instance not found: {layer}/{instance}")]
    NotFound { layer: String, instance: String },

    #[error("failed to access instance registry at {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "instance registry corrupted: {path}\n  → Fix: Restore the file from a backup\n  → Details: {source}"
    )]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InstancesError {
    /// The registry could not be read or written, or held malformed content.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Corrupted { .. })
    }
}
