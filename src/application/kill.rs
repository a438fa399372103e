//! Kill use case
//!
//! Removes an instance record from the registry, but only after confirming no
//! live instance is built on top of it. Provisioning teardown happens outside
//! this crate; this is the safety gate and the bookkeeping.
//!
//! The layer itself need not still be defined: instances left behind after a
//! definitions update that dropped their layer can be removed, as long as no
//! currently defined child layer has an instance built on them.

use crate::application::dependants::ensure_no_dependants;
use crate::domain::entities::LayerInstance;
use crate::domain::ports::DefinitionsBackend;
use crate::error::LayerformResult;
use crate::infrastructure::repositories::JsonInstancesRepository;

pub fn kill_instance<D>(
    instances: &JsonInstancesRepository,
    definitions: &D,
    layer_name: &str,
    instance_name: &str,
) -> LayerformResult<LayerInstance>
where
    D: DefinitionsBackend + ?Sized,
{
    let instance = instances.get_instance(layer_name, instance_name)?;

    ensure_no_dependants(instances, definitions, layer_name, instance_name)?;

    instances.delete_instance(layer_name, instance_name)?;
    tracing::info!(
        layer = layer_name,
        instance = instance_name,
        "removed layer instance"
    );
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LayerDefinition;
    use crate::domain::ports::{InstancesBackend, InstancesError};
    use crate::error::LayerformError;
    use crate::infrastructure::repositories::JsonDefinitionsRepository;
    use tempfile::{tempdir, TempDir};

    fn fixture() -> (TempDir, JsonDefinitionsRepository, JsonInstancesRepository) {
        let dir = tempdir().unwrap();
        let mut definitions =
            JsonDefinitionsRepository::open(dir.path().join("defs.json")).unwrap();
        definitions
            .update_layers(vec![
                LayerDefinition::new("base"),
                LayerDefinition::new("app").with_dependencies(["base"]),
            ])
            .unwrap();

        let instances = JsonInstancesRepository::with_path(dir.path().join("instances.json"));
        instances.save_instance(LayerInstance::new("base", "b1")).unwrap();
        instances.save_instance(LayerInstance::new("base", "b2")).unwrap();
        instances
            .save_instance(LayerInstance::new("app", "a1").with_dependency_instance("base", "b1"))
            .unwrap();

        (dir, definitions, instances)
    }

    #[test]
    fn kill_refuses_instance_with_dependants() {
        let (_dir, definitions, instances) = fixture();

        let err = kill_instance(&instances, &definitions, "base", "b1").unwrap_err();

        assert!(matches!(err, LayerformError::HasDependants { .. }));
        assert_eq!(instances.list_instances().unwrap().len(), 3);
    }

    #[test]
    fn kill_removes_free_instance() {
        let (_dir, definitions, instances) = fixture();

        let removed = kill_instance(&instances, &definitions, "base", "b2").unwrap();

        assert_eq!(removed.instance_name, "b2");
        assert_eq!(instances.list_instances_by_layer("base").unwrap().len(), 1);
    }

    #[test]
    fn kill_in_dependency_order_succeeds() {
        let (_dir, definitions, instances) = fixture();

        kill_instance(&instances, &definitions, "app", "a1").unwrap();
        kill_instance(&instances, &definitions, "base", "b1").unwrap();

        assert_eq!(instances.list_instances().unwrap().len(), 1);
    }

    #[test]
    fn kill_unknown_instance_is_not_found() {
        let (_dir, definitions, instances) = fixture();

        let err = kill_instance(&instances, &definitions, "base", "b9").unwrap_err();
        assert!(matches!(
            err,
            LayerformError::Registry(InstancesError::NotFound { .. })
        ));

        let err = kill_instance(&instances, &definitions, "ghost", "b1").unwrap_err();
        assert!(matches!(
            err,
            LayerformError::Registry(InstancesError::NotFound { .. })
        ));
    }

    #[test]
    fn kill_instance_of_dropped_layer() {
        let (_dir, mut definitions, instances) = fixture();
        definitions
            .update_layers(vec![LayerDefinition::new("app")])
            .unwrap();

        let removed = kill_instance(&instances, &definitions, "base", "b1").unwrap();

        assert_eq!(removed.instance_name, "b1");
        assert_eq!(instances.list_instances().unwrap().len(), 2);
    }

    #[test]
    fn kill_dropped_layer_still_guarded_by_defined_children() {
        let (_dir, mut definitions, instances) = fixture();
        definitions
            .update_layers(vec![LayerDefinition::new("app").with_dependencies(["base"])])
            .unwrap();

        let err = kill_instance(&instances, &definitions, "base", "b1").unwrap_err();
        assert!(matches!(err, LayerformError::HasDependants { .. }));
    }

    #[test]
    fn kill_fails_closed_on_unreadable_registry() {
        let (dir, definitions, _instances) = fixture();
        let path = dir.path().join("unreadable.json");
        std::fs::create_dir(&path).unwrap();
        let instances = JsonInstancesRepository::with_path(path);

        let err = kill_instance(&instances, &definitions, "base", "b2").unwrap_err();
        assert!(matches!(err, LayerformError::Registry(ref e) if e.is_storage()));

        let err = crate::application::has_dependants(&instances, &definitions, "base", "b2")
            .unwrap_err();
        assert!(matches!(err, LayerformError::Registry(ref e) if e.is_storage()));
    }
}
