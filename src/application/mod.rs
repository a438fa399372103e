//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `configure_from_file` - Replace the definition set from a document
//! - `LayerQueryUseCase` - List, describe and resolve layers
//! - `has_dependants` / `ensure_no_dependants` - Deletion safety checks
//! - `kill_instance` - Guarded removal of an instance record

pub mod configure;
pub mod dependants;
pub mod kill;
pub mod layers;

pub use configure::{configure_from_file, configure_from_str, ConfigureResult};
pub use dependants::{ensure_no_dependants, has_dependants};
pub use kill::kill_instance;
pub use layers::{LayerDetails, LayerQueryUseCase, LayerSummary};
