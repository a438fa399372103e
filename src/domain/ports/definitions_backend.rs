//! DefinitionsBackend port
//!
//! The store of layer definitions. Reads observe the latest committed update;
//! updates replace the whole set at once.

use std::path::PathBuf;

use crate::domain::entities::LayerDefinition;
use crate::domain::services::dependency_resolver;

pub type DefinitionsResult<T> = Result<T, DefinitionsError>;

pub trait DefinitionsBackend {
    /// All definitions, in stable order. Empty when nothing is defined.
    fn list_layers(&self) -> DefinitionsResult<Vec<LayerDefinition>>;

    fn get_layer(&self, name: &str) -> DefinitionsResult<LayerDefinition>;

    /// Replace the entire definition set. Readers see either the old or the
    /// new set, never a mixture.
    fn update_layers(&mut self, definitions: Vec<LayerDefinition>) -> DefinitionsResult<()>;

    /// Transitive dependencies of `layer` in depth-first discovery order.
    fn resolve_dependencies(
        &self,
        layer: &LayerDefinition,
    ) -> DefinitionsResult<Vec<LayerDefinition>> {
        dependency_resolver::resolve_dependencies(layer, |name| self.get_layer(name))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefinitionsError {
    #[error("layer definition not found: {name}")]
    NotFound { name: String },

    #[error("invalid layer definitions: {message}")]
    Invalid { message: String },

    #[error("failed to access layer definitions at {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "layer definitions file corrupted: {path}\n  → Fix: Re-run `layerform configure --file <definitions>`\n  → Details: {source}"
    )]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DefinitionsError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The backing medium failed: unreadable, unwritable or malformed.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Corrupted { .. })
    }
}
