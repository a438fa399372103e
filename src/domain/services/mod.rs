//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod dependency_resolver;

pub use dependency_resolver::resolve_dependencies;
