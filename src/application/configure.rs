//! Configure use case
//!
//! Replaces the stored definition set with the contents of a definitions
//! document.

use std::path::Path;

use crate::application::layers::LayerSummary;
use crate::domain::entities::{DanglingReference, DefinitionSet};
use crate::domain::ports::{DefinitionsBackend, DefinitionsError};
use crate::error::{LayerformError, LayerformResult};
use crate::infrastructure::repositories::parse_definitions_document;

#[derive(Debug, Clone)]
pub struct ConfigureResult {
    pub layers: Vec<LayerSummary>,
    /// Dependencies naming no definition in the new set. Stored anyway;
    /// resolving a layer that reaches one fails.
    pub dangling: Vec<DanglingReference>,
}

pub fn configure_from_file<D>(
    definitions: &mut D,
    file: &Path,
) -> LayerformResult<ConfigureResult>
where
    D: DefinitionsBackend + ?Sized,
{
    let content = std::fs::read_to_string(file)?;
    configure_from_str(definitions, &content).map_err(|e| match e {
        LayerformError::InvalidDocument { source, .. } => LayerformError::InvalidDocument {
            file: file.to_path_buf(),
            source,
        },
        other => other,
    })
}

pub fn configure_from_str<D>(
    definitions: &mut D,
    content: &str,
) -> LayerformResult<ConfigureResult>
where
    D: DefinitionsBackend + ?Sized,
{
    let parsed =
        parse_definitions_document(content).map_err(|e| LayerformError::InvalidDocument {
            file: "<input>".into(),
            source: e,
        })?;
    let set = DefinitionSet::from_definitions(parsed).map_err(|e| DefinitionsError::Invalid {
        message: e.to_string(),
    })?;

    let dangling = set.dangling_references();
    for reference in &dangling {
        tracing::warn!(
            layer = %reference.layer,
            missing = %reference.missing,
            "layer depends on an undefined layer"
        );
    }

    let layers: Vec<LayerSummary> = set.all().iter().cloned().map(LayerSummary::from).collect();
    definitions.update_layers(set.into_vec())?;

    Ok(ConfigureResult { layers, dangling })
}
