//! Plain-text views

use std::fmt::Write;

use layerform::application::{LayerDetails, LayerSummary};
use layerform::LayerInstance;

pub fn render_definitions(layers: &[LayerSummary]) -> String {
    if layers.is_empty() {
        return "No layer definitions.\n".to_string();
    }

    let mut out = String::new();
    for layer in layers {
        if layer.dependencies.is_empty() {
            let _ = writeln!(out, "{}", layer.name);
        } else {
            let _ = writeln!(out, "{} -> {}", layer.name, layer.dependencies.join(", "));
        }
    }
    out
}

pub fn render_instances(instances: &[LayerInstance]) -> String {
    if instances.is_empty() {
        return "No layer instances.\n".to_string();
    }

    let mut out = String::new();
    for instance in instances {
        let _ = write!(out, "{}/{}", instance.definition_name, instance.instance_name);
        if !instance.dependencies_instance.is_empty() {
            let parents: Vec<String> = instance
                .dependencies_instance
                .iter()
                .map(|(layer, name)| format!("{layer}={name}"))
                .collect();
            let _ = write!(out, " ({})", parents.join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn render_details(details: &LayerDetails) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "layer: {}", details.name);
    let _ = writeln!(out, "dependencies: {}", join_or_none(&details.dependencies));
    let _ = writeln!(out, "resolved: {}", join_or_none(&details.resolved));
    out
}

pub fn instance_json(instance: &LayerInstance) -> serde_json::Value {
    serde_json::json!({
        "definition_name": instance.definition_name,
        "instance_name": instance.instance_name,
        "dependencies_instance": instance.dependencies_instance,
    })
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_definitions_shows_dependencies() {
        let layers = vec![
            LayerSummary {
                name: "base".to_string(),
                dependencies: vec![],
            },
            LayerSummary {
                name: "app".to_string(),
                dependencies: vec!["base".to_string(), "db".to_string()],
            },
        ];
        insta::assert_snapshot!(render_definitions(&layers), @r"
        base
        app -> base, db
        ");
        assert_eq!(render_definitions(&[]), "No layer definitions.\n");
    }

    #[test]
    fn render_instances_lists_parent_instances() {
        let instances = vec![
            LayerInstance::new("base", "b1"),
            LayerInstance::new("app", "a1").with_dependency_instance("base", "b1"),
        ];
        assert_eq!(render_instances(&instances), "base/b1\napp/a1 (base=b1)\n");
    }

    #[test]
    fn render_details_marks_empty_lists() {
        let details = LayerDetails {
            name: "base".to_string(),
            dependencies: vec![],
            resolved: vec![],
        };
        assert_eq!(
            render_details(&details),
            "layer: base\ndependencies: (none)\nresolved: (none)\n"
        );
    }
}
