//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod definitions_backend;
pub mod instances_backend;

pub use definitions_backend::{DefinitionsBackend, DefinitionsError, DefinitionsResult};
pub use instances_backend::{InstancesBackend, InstancesError, InstancesResult};
