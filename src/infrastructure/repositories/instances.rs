//! JSON Instances Repository
//!
//! File-backed instance registry, by default at
//! `~/.layerform/layerform.instances.json`. Every call reads the file, so the
//! registry always reflects the latest write by any process.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::LayerInstance;
use crate::domain::ports::{InstancesBackend, InstancesError, InstancesResult};
use crate::infrastructure::fs::write_atomic;

pub const INSTANCES_FILE_NAME: &str = "layerform.instances.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLayerInstance {
    definition_name: String,
    instance_name: String,
    #[serde(default)]
    dependencies_instance: BTreeMap<String, String>,
}

pub struct JsonInstancesRepository {
    path: PathBuf,
}

impl JsonInstancesRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_instance(
        &self,
        layer_name: &str,
        instance_name: &str,
    ) -> InstancesResult<LayerInstance> {
        self.load_from_disk()?
            .into_iter()
            .find(|i| i.definition_name == layer_name && i.instance_name == instance_name)
            .ok_or_else(|| InstancesError::NotFound {
                layer: layer_name.to_string(),
                instance: instance_name.to_string(),
            })
    }

    /// Insert or replace the instance keyed by definition and instance name.
    ///
    /// Instances are recorded by the provisioning side; only tests seed them here.
    #[cfg(test)]
    pub(crate) fn save_instance(&self, instance: LayerInstance) -> InstancesResult<()> {
        let mut instances = self.load_from_disk()?;
        match instances.iter_mut().find(|i| {
            i.definition_name == instance.definition_name
                && i.instance_name == instance.instance_name
        }) {
            Some(existing) => *existing = instance,
            None => instances.push(instance),
        }
        self.save_to_disk(&instances)
    }

    pub fn delete_instance(&self, layer_name: &str, instance_name: &str) -> InstancesResult<()> {
        let mut instances = self.load_from_disk()?;
        let len_before = instances.len();
        instances
            .retain(|i| !(i.definition_name == layer_name && i.instance_name == instance_name));
        if instances.len() == len_before {
            return Err(InstancesError::NotFound {
                layer: layer_name.to_string(),
                instance: instance_name.to_string(),
            });
        }

        tracing::debug!(
            layer = layer_name,
            instance = instance_name,
            "deleting layer instance"
        );
        self.save_to_disk(&instances)
    }

    fn load_from_disk(&self) -> InstancesResult<Vec<LayerInstance>> {
        // Only a missing file reads as an empty registry.
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(InstancesError::Storage {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let records: Vec<JsonLayerInstance> =
            serde_json::from_str(&content).map_err(|e| InstancesError::Corrupted {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(records.into_iter().map(from_json).collect())
    }

    fn save_to_disk(&self, instances: &[LayerInstance]) -> InstancesResult<()> {
        let records: Vec<JsonLayerInstance> = instances.iter().map(to_json).collect();
        let content =
            serde_json::to_string_pretty(&records).map_err(|e| InstancesError::Corrupted {
                path: self.path.clone(),
                source: e,
            })?;

        write_atomic(&self.path, content.as_bytes()).map_err(|e| InstancesError::Storage {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl InstancesBackend for JsonInstancesRepository {
    fn list_instances(&self) -> InstancesResult<Vec<LayerInstance>> {
        self.load_from_disk()
    }

    fn list_instances_by_layer(&self, layer_name: &str) -> InstancesResult<Vec<LayerInstance>> {
        tracing::debug!(
            layer = layer_name,
            path = %self.path.display(),
            "listing layer instances"
        );
        Ok(self
            .load_from_disk()?
            .into_iter()
            .filter(|i| i.definition_name == layer_name)
            .collect())
    }
}

fn from_json(record: JsonLayerInstance) -> LayerInstance {
    LayerInstance {
        definition_name: record.definition_name,
        instance_name: record.instance_name,
        dependencies_instance: record.dependencies_instance,
    }
}

fn to_json(instance: &LayerInstance) -> JsonLayerInstance {
    JsonLayerInstance {
        definition_name: instance.definition_name.clone(),
        instance_name: instance.instance_name.clone(),
        dependencies_instance: instance.dependencies_instance.clone(),
    }
}
