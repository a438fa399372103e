//! Layer instance entity
//!
//! A deployed occurrence of a layer definition. Instances are owned by the
//! instance registry; this crate only reads them to detect dependants.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInstance {
    pub definition_name: String,
    pub instance_name: String,
    /// Dependency layer name → name of the instance this one was built against.
    pub dependencies_instance: BTreeMap<String, String>,
}

impl LayerInstance {
    pub fn new(definition_name: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            definition_name: definition_name.into(),
            instance_name: instance_name.into(),
            dependencies_instance: BTreeMap::new(),
        }
    }

    pub fn with_dependency_instance(
        mut self,
        layer_name: impl Into<String>,
        instance_name: impl Into<String>,
    ) -> Self {
        self.dependencies_instance
            .insert(layer_name.into(), instance_name.into());
        self
    }

    /// The instance of `parent_layer` this instance was built against, if recorded.
    pub fn dependency_instance_name(&self, parent_layer: &str) -> Option<&str> {
        self.dependencies_instance
            .get(parent_layer)
            .map(String::as_str)
    }
}
