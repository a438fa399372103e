//! Property tests for dependency resolution.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use layerform::{resolve_dependencies, DefinitionsError, LayerDefinition};

const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f", "g", "h"];

/// Arbitrary graph over `NAMES`, cycles and self-edges included.
fn graph() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    proptest::collection::btree_map(
        proptest::sample::select(NAMES).prop_map(str::to_string),
        proptest::collection::vec(
            proptest::sample::select(NAMES).prop_map(str::to_string),
            0..4,
        ),
        1..NAMES.len(),
    )
}

fn lookup<'a>(
    graph: &'a BTreeMap<String, Vec<String>>,
) -> impl FnMut(&str) -> Result<LayerDefinition, DefinitionsError> + 'a {
    move |name: &str| {
        graph
            .get(name)
            .map(|deps| LayerDefinition::new(name).with_dependencies(deps.iter().cloned()))
            .ok_or_else(|| DefinitionsError::not_found(name))
    }
}

/// Drop references to names the graph does not define.
fn close(graph: &BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    graph
        .iter()
        .map(|(name, deps)| {
            let kept = deps.iter().filter(|d| graph.contains_key(*d)).cloned().collect();
            (name.clone(), kept)
        })
        .collect()
}

fn reachable(graph: &BTreeMap<String, Vec<String>>, root: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut stack: Vec<&String> = graph[root].iter().collect();
    while let Some(name) = stack.pop() {
        if seen.insert(name.clone()) {
            if let Some(deps) = graph.get(name) {
                stack.extend(deps);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution terminates and never panics, cycles included.
    #[test]
    fn property_resolution_terminates(graph in graph()) {
        for (name, deps) in &graph {
            let root = LayerDefinition::new(name.clone()).with_dependencies(deps.iter().cloned());
            let _ = resolve_dependencies(&root, lookup(&graph));
        }
    }

    /// PROPERTY: A successful resolution never lists a layer twice.
    #[test]
    fn property_resolution_has_no_duplicates(graph in graph()) {
        for (name, deps) in &graph {
            let root = LayerDefinition::new(name.clone()).with_dependencies(deps.iter().cloned());
            if let Ok(resolved) = resolve_dependencies(&root, lookup(&graph)) {
                let names: HashSet<_> = resolved.iter().map(|l| l.name.clone()).collect();
                prop_assert_eq!(names.len(), resolved.len());
            }
        }
    }

    /// PROPERTY: When every referenced name exists, exactly the reachable set is returned.
    #[test]
    fn property_resolution_covers_reachable_set(graph in graph()) {
        let closed = close(&graph);

        for (name, deps) in &closed {
            let root = LayerDefinition::new(name.clone()).with_dependencies(deps.iter().cloned());
            let resolved = resolve_dependencies(&root, lookup(&closed)).unwrap();
            let names: HashSet<String> = resolved.into_iter().map(|l| l.name).collect();
            prop_assert_eq!(names, reachable(&closed, name));
        }
    }

    /// PROPERTY: A dangling reference anywhere in the reachable set fails resolution.
    #[test]
    fn property_dangling_reference_fails(graph in graph(), missing_from in 0usize..8) {
        let mut graph = close(&graph);
        let key = graph.keys().nth(missing_from % graph.len()).cloned().unwrap();
        graph.get_mut(&key).unwrap().push("ghost".to_string());

        let root = LayerDefinition::new("root").with_dependencies([key]);
        let err = resolve_dependencies(&root, lookup(&graph)).unwrap_err();
        prop_assert!(err.is_not_found());
        prop_assert!(err.to_string().contains("ghost"));
    }
}
