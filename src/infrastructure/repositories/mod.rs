//! Repository Implementations
//!
//! Concrete, file-backed implementations of the domain ports.

mod definitions;
mod instances;

pub use definitions::{
    parse_definitions_document, JsonDefinitionsRepository, DEFINITIONS_FILE_NAME,
};
pub use instances::{JsonInstancesRepository, INSTANCES_FILE_NAME};
