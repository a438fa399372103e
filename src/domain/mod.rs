//! Domain Layer
//!
//! The core of layerform: layer definitions, their dependency graph, and the
//! ports through which definitions and deployed instances are reached.
//!
//! ## Structure
//!
//! - `entities/` - Layer definitions, definition snapshots, layer instances
//! - `services/` - Dependency resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
