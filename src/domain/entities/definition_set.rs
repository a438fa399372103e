//! Definition set entity
//!
//! An immutable snapshot of every layer definition known to the store. Updates
//! never mutate a published snapshot: a new set is built and then swapped in.

use std::collections::HashMap;

use crate::domain::entities::LayerDefinition;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("layer definition at position {index} has an empty name")]
pub struct EmptyLayerName {
    pub index: usize,
}

/// A dependency name that matches no definition in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub layer: String,
    pub missing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSet {
    layers: Vec<LayerDefinition>,
    /// Position of each name in `layers`.
    index: HashMap<String, usize>,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from an update batch.
    ///
    /// Names must be non-empty. A record whose name was already seen in the
    /// batch replaces the earlier record in place.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = LayerDefinition>,
    ) -> Result<Self, EmptyLayerName> {
        let mut set = Self::new();
        for (index, definition) in definitions.into_iter().enumerate() {
            if definition.name.trim().is_empty() {
                return Err(EmptyLayerName { index });
            }
            set.upsert(definition);
        }
        Ok(set)
    }

    fn upsert(&mut self, definition: LayerDefinition) {
        match self.index.get(&definition.name) {
            Some(&position) => self.layers[position] = definition,
            None => {
                self.index.insert(definition.name.clone(), self.layers.len());
                self.layers.push(definition);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&LayerDefinition> {
        self.index.get(name).map(|&position| &self.layers[position])
    }

    pub fn all(&self) -> &[LayerDefinition] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Definitions that declare a direct dependency on `name`.
    pub fn children_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LayerDefinition> {
        self.layers.iter().filter(move |l| l.depends_on(name))
    }

    /// Every dependency name that no definition in this set provides.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        self.layers
            .iter()
            .flat_map(|layer| {
                layer
                    .dependencies
                    .iter()
                    .filter(|dep| self.get(dep).is_none())
                    .map(|dep| DanglingReference {
                        layer: layer.name.clone(),
                        missing: dep.clone(),
                    })
            })
            .collect()
    }

    pub fn into_vec(self) -> Vec<LayerDefinition> {
        self.layers
    }
}
