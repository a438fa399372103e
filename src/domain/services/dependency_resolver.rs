//! Dependency resolver
//!
//! Flattens the transitive dependencies of a layer into a single list.
//!
//! Order is depth-first discovery order following each layer's declared
//! dependency order: a layer comes before its own dependencies, and a layer
//! reachable through several paths appears once, where it was first reached.
//! This is neither a topological nor an alphabetical order.
//!
//! Cycles are not reported. A name is never expanded twice, so a cyclic graph
//! still resolves to a finite list. The root itself is not marked as visited up
//! front, which means a cycle through the root lists the root as one of its own
//! dependencies.

use std::collections::HashSet;

use crate::domain::entities::LayerDefinition;

/// Resolve every transitive dependency of `layer`, looking names up with `lookup`.
///
/// The first failed lookup aborts resolution and its error is returned as-is;
/// nothing resolved before the failure is returned.
pub fn resolve_dependencies<F, E>(
    layer: &LayerDefinition,
    mut lookup: F,
) -> Result<Vec<LayerDefinition>, E>
where
    F: FnMut(&str) -> Result<LayerDefinition, E>,
{
    let mut visited: HashSet<String> = HashSet::new();
    let mut resolved = Vec::new();

    // Pushed in reverse so the first declared dependency is popped first.
    let mut pending: Vec<String> = layer.dependencies.iter().rev().cloned().collect();

    while let Some(name) = pending.pop() {
        if !visited.insert(name.clone()) {
            continue;
        }

        let dependency = lookup(&name)?;
        pending.extend(dependency.dependencies.iter().rev().cloned());
        resolved.push(dependency);
    }

    Ok(resolved)
}
