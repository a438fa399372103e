use layerform::{DefinitionsError, InstancesError, LayerformError};

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = hint_for(err) {
        out.push_str(&format!("  → Fix: {}\n", hint));
    }
    out
}

/// Short, stable identifier for the failure, used in `--json` error events.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<LayerformError>() {
        return match e {
            LayerformError::Definitions(d) => definitions_kind(d),
            LayerformError::Registry(r) => instances_kind(r),
            LayerformError::HasDependants { .. } => "has_dependants",
            LayerformError::InvalidConfig { .. } => "invalid_config",
            LayerformError::InvalidDocument { .. } => "invalid_document",
            LayerformError::Io(_) => "io",
        };
    }
    if let Some(d) = err.downcast_ref::<DefinitionsError>() {
        return definitions_kind(d);
    }
    if let Some(r) = err.downcast_ref::<InstancesError>() {
        return instances_kind(r);
    }
    "error"
}

fn definitions_kind(err: &DefinitionsError) -> &'static str {
    match err {
        DefinitionsError::NotFound { .. } => "not_found",
        DefinitionsError::Invalid { .. } => "invalid_definitions",
        DefinitionsError::Storage { .. } | DefinitionsError::Corrupted { .. } => "storage",
    }
}

fn instances_kind(err: &InstancesError) -> &'static str {
    match err {
        InstancesError::NotFound { .. } => "instance_not_found",
        InstancesError::Storage { .. } | InstancesError::Corrupted { .. } => "registry",
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match error_kind(err) {
        "not_found" => Some("Run `layerform list definitions` to see configured layers."),
        "instance_not_found" => Some("Run `layerform list instances` to see recorded instances."),
        "has_dependants" => Some("Kill the instances built on top of this one first."),
        _ => None,
    }
}
