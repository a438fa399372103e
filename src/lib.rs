//! Layerform - layer definitions with dependency resolution
//!
//! A layer is a named infrastructure unit that may depend on other layers.
//! This crate keeps the set of layer definitions in a JSON file, resolves the
//! transitive dependencies of a layer, and guards instance removal by checking
//! whether any live instance is built on top of the one being removed.
//!
//! ## Architecture
//!
//! - `domain` - entities (`LayerDefinition`, `LayerInstance`, `DefinitionSet`),
//!   ports (`DefinitionsBackend`, `InstancesBackend`) and the dependency resolver
//! - `infrastructure` - file-backed repositories and atomic writes
//! - `application` - use cases: configure, query, dependant checks, kill
//! - `config` - TOML configuration with environment overrides
//! - `logging` - `tracing` subscriber setup for the CLI

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::{ensure_no_dependants, has_dependants};
pub use config::Config;
pub use domain::entities::{DefinitionSet, LayerDefinition, LayerInstance};
pub use domain::ports::{DefinitionsBackend, DefinitionsError, InstancesBackend, InstancesError};
pub use domain::services::resolve_dependencies;
pub use error::{LayerformError, LayerformResult};
pub use infrastructure::repositories::{
    parse_definitions_document, JsonDefinitionsRepository, JsonInstancesRepository,
};
