//! JSON Definitions Repository
//!
//! Persists the layer definition set as a JSON array, by default at
//! `~/.layerform/layerform.definitions.json`:
//!
//! ```json
//! [
//!   { "name": "layer1", "dependencies": [] },
//!   { "name": "layer2", "dependencies": ["layer1"] }
//! ]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DefinitionSet, LayerDefinition};
use crate::domain::ports::{DefinitionsBackend, DefinitionsError, DefinitionsResult};
use crate::infrastructure::fs::write_atomic;

pub const DEFINITIONS_FILE_NAME: &str = "layerform.definitions.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLayerDefinition {
    name: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// A definitions document as accepted by `layerform configure`: either the
/// persisted array or an object with a `layers` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DefinitionsDocument {
    List(Vec<JsonLayerDefinition>),
    Object { layers: Vec<JsonLayerDefinition> },
}

/// Parse a definitions document (array or `{ "layers": [...] }`).
pub fn parse_definitions_document(
    content: &str,
) -> Result<Vec<LayerDefinition>, serde_json::Error> {
    let layers = match serde_json::from_str::<DefinitionsDocument>(content)? {
        DefinitionsDocument::List(layers) => layers,
        DefinitionsDocument::Object { layers } => layers,
    };
    Ok(layers.into_iter().map(from_json).collect())
}

/// File-backed definition store.
///
/// The file is read once on [`open`](Self::open) and kept as an in-memory
/// snapshot. [`update_layers`](DefinitionsBackend::update_layers) writes the new
/// set atomically and only then publishes it, so a failed write leaves the
/// previous snapshot in place.
#[derive(Debug)]
pub struct JsonDefinitionsRepository {
    path: PathBuf,
    snapshot: DefinitionSet,
}

impl JsonDefinitionsRepository {
    /// Open the store at `path`. A missing file is an empty definition set.
    pub fn open(path: impl Into<PathBuf>) -> DefinitionsResult<Self> {
        let path = path.into();
        let snapshot = load_from_disk(&path)?;
        tracing::debug!(
            path = %path.display(),
            layers = snapshot.len(),
            "opened layer definitions"
        );
        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the backing file, picking up writes made by other processes.
    pub fn reload(&mut self) -> DefinitionsResult<()> {
        self.snapshot = load_from_disk(&self.path)?;
        Ok(())
    }

    fn save_to_disk(&self, set: &DefinitionSet) -> DefinitionsResult<()> {
        let records: Vec<JsonLayerDefinition> = set.all().iter().map(to_json).collect();
        let content =
            serde_json::to_string_pretty(&records).map_err(|e| DefinitionsError::Corrupted {
                path: self.path.clone(),
                source: e,
            })?;

        write_atomic(&self.path, content.as_bytes()).map_err(|e| DefinitionsError::Storage {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl DefinitionsBackend for JsonDefinitionsRepository {
    fn list_layers(&self) -> DefinitionsResult<Vec<LayerDefinition>> {
        tracing::debug!(path = %self.path.display(), "listing layer definitions");
        Ok(self.snapshot.all().to_vec())
    }

    fn get_layer(&self, name: &str) -> DefinitionsResult<LayerDefinition> {
        tracing::debug!(layer = name, "getting layer definition");
        self.snapshot
            .get(name)
            .cloned()
            .ok_or_else(|| DefinitionsError::not_found(name))
    }

    fn update_layers(&mut self, definitions: Vec<LayerDefinition>) -> DefinitionsResult<()> {
        let next = DefinitionSet::from_definitions(definitions).map_err(|e| {
            DefinitionsError::Invalid {
                message: e.to_string(),
            }
        })?;

        self.save_to_disk(&next)?;
        tracing::debug!(
            path = %self.path.display(),
            layers = next.len(),
            "updated layer definitions"
        );
        self.snapshot = next;
        Ok(())
    }
}

fn load_from_disk(path: &Path) -> DefinitionsResult<DefinitionSet> {
    // A missing file is an empty set. Anything else that stops the read is a
    // storage failure, never an empty set.
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DefinitionSet::new()),
        Err(e) => {
            return Err(DefinitionsError::Storage {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let records: Vec<JsonLayerDefinition> =
        serde_json::from_str(&content).map_err(|e| DefinitionsError::Corrupted {
            path: path.to_path_buf(),
            source: e,
        })?;

    DefinitionSet::from_definitions(records.into_iter().map(from_json)).map_err(|e| {
        DefinitionsError::Invalid {
            message: format!("{} ({})", e, path.display()),
        }
    })
}

fn from_json(record: JsonLayerDefinition) -> LayerDefinition {
    LayerDefinition {
        name: record.name,
        dependencies: record.dependencies,
    }
}

fn to_json(layer: &LayerDefinition) -> JsonLayerDefinition {
    JsonLayerDefinition {
        name: layer.name.clone(),
        dependencies: layer.dependencies.clone(),
    }
}
