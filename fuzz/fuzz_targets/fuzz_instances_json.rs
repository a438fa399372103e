#![no_main]

use libfuzzer_sys::fuzz_target;

use layerform::{InstancesBackend, JsonInstancesRepository};

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let path = dir.path().join("layerform.instances.json");
    if std::fs::write(&path, data).is_err() {
        return;
    }

    // A malformed registry must surface as an error, never a panic
    let repo = JsonInstancesRepository::with_path(path);
    let _ = repo.list_instances_by_layer("base");
});
