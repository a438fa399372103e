use crate::domain::entities::LayerDefinition;
use crate::domain::ports::{DefinitionsBackend, DefinitionsResult};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub dependencies: Vec<String>,
}

impl From<LayerDefinition> for LayerSummary {
    fn from(layer: LayerDefinition) -> Self {
        Self {
            name: layer.name,
            dependencies: layer.dependencies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LayerDetails {
    pub name: String,
    pub dependencies: Vec<String>,
    /// Transitive dependencies in resolution order.
    pub resolved: Vec<String>,
}

/// Read-only queries over a definitions backend.
pub struct LayerQueryUseCase<'a, D: DefinitionsBackend + ?Sized> {
    definitions: &'a D,
}

impl<'a, D: DefinitionsBackend + ?Sized> LayerQueryUseCase<'a, D> {
    pub fn new(definitions: &'a D) -> Self {
        Self { definitions }
    }

    pub fn list(&self) -> DefinitionsResult<Vec<LayerSummary>> {
        Ok(self
            .definitions
            .list_layers()?
            .into_iter()
            .map(LayerSummary::from)
            .collect())
    }

    pub fn resolve(&self, name: &str) -> DefinitionsResult<Vec<LayerSummary>> {
        let layer = self.definitions.get_layer(name)?;
        Ok(self
            .definitions
            .resolve_dependencies(&layer)?
            .into_iter()
            .map(LayerSummary::from)
            .collect())
    }

    pub fn describe(&self, name: &str) -> DefinitionsResult<LayerDetails> {
        let layer = self.definitions.get_layer(name)?;
        let resolved = self
            .definitions
            .resolve_dependencies(&layer)?
            .into_iter()
            .map(|l| l.name)
            .collect();

        Ok(LayerDetails {
            name: layer.name,
            dependencies: layer.dependencies,
            resolved,
        })
    }
}
