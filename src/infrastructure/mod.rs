//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic file replacement, home directory resolution
//! - `repositories/` - JSON-file definition store and instance registry

pub mod fs;
pub mod repositories;

pub use repositories::{JsonDefinitionsRepository, JsonInstancesRepository};
