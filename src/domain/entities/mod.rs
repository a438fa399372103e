//! Domain Entities
//!
//! - `LayerDefinition` - A named layer and its declared dependencies
//! - `DefinitionSet` - Snapshot of all definitions held by the store
//! - `LayerInstance` - A deployed occurrence of a layer (read-only here)

mod definition_set;
mod instance;
mod layer;

pub use definition_set::{DanglingReference, DefinitionSet, EmptyLayerName};
pub use instance::LayerInstance;
pub use layer::LayerDefinition;
