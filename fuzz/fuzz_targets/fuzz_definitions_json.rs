#![no_main]

use libfuzzer_sys::fuzz_target;

use layerform::{parse_definitions_document, resolve_dependencies, DefinitionSet};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(parsed) = parse_definitions_document(content) else {
        return;
    };
    let Ok(set) = DefinitionSet::from_definitions(parsed) else {
        return;
    };

    // Resolution over arbitrary (possibly cyclic) graphs must terminate
    for layer in set.all() {
        let _ = resolve_dependencies(layer, |name| set.get(name).cloned().ok_or(()));
    }
});
