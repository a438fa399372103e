//! Instance dependant checks
//!
//! Before an instance of a layer is removed, every live instance built on top
//! of it must be gone. Only direct children are inspected: removing a chain of
//! instances re-checks at each step.

use crate::domain::ports::{DefinitionsBackend, InstancesBackend};
use crate::error::{LayerformError, LayerformResult};

/// Whether any live instance of a direct child of `layer_name` was built on
/// `instance_name`.
///
/// Returns on the first dependant found. The instance registry is only
/// consulted for definitions that depend on `layer_name`.
pub fn has_dependants<I, D>(
    instances: &I,
    definitions: &D,
    layer_name: &str,
    instance_name: &str,
) -> LayerformResult<bool>
where
    I: InstancesBackend + ?Sized,
    D: DefinitionsBackend + ?Sized,
{
    tracing::debug!(
        layer = layer_name,
        instance = instance_name,
        "checking if layer has dependants"
    );

    let children = definitions
        .list_layers()?
        .into_iter()
        .filter(|definition| definition.depends_on(layer_name));

    for child in children {
        let found = instances
            .list_instances_by_layer(&child.name)?
            .iter()
            .any(|i| i.dependency_instance_name(layer_name) == Some(instance_name));

        if found {
            tracing::debug!(
                layer = layer_name,
                instance = instance_name,
                dependant_layer = %child.name,
                "found dependant instance"
            );
            return Ok(true);
        }
    }

    Ok(false)
}

/// Fail-closed guard around [`has_dependants`].
///
/// Errors with [`LayerformError::HasDependants`] when a dependant exists; any
/// failure to answer the question is returned as-is.
pub fn ensure_no_dependants<I, D>(
    instances: &I,
    definitions: &D,
    layer_name: &str,
    instance_name: &str,
) -> LayerformResult<()>
where
    I: InstancesBackend + ?Sized,
    D: DefinitionsBackend + ?Sized,
{
    if has_dependants(instances, definitions, layer_name, instance_name)? {
        return Err(LayerformError::HasDependants {
            layer: layer_name.to_string(),
            instance: instance_name.to_string(),
        });
    }
    Ok(())
}
