//! Configure command handler

use std::path::Path;

use anyhow::Result;

use super::CommandContext;

pub fn cmd_configure(ctx: &CommandContext, file: &Path) -> Result<()> {
    let mut definitions = ctx.open_definitions()?;
    let result = layerform::application::configure_from_file(&mut definitions, file)?;

    if ctx.json {
        let dangling: Vec<_> = result
            .dangling
            .iter()
            .map(|r| serde_json::json!({ "layer": r.layer, "missing": r.missing }))
            .collect();
        let out = serde_json::json!({
            "event": "data",
            "command": "configure",
            "path": definitions.path().display().to_string(),
            "layers": result.layers,
            "dangling": dangling,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    println!(
        "Configured {} layer(s) in {}",
        result.layers.len(),
        definitions.path().display()
    );
    for reference in &result.dangling {
        println!(
            "  warning: '{}' depends on undefined layer '{}'",
            reference.layer, reference.missing
        );
    }
    Ok(())
}
