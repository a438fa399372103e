//! Dependants command handler

use anyhow::Result;

use super::CommandContext;

pub fn cmd_dependants(ctx: &CommandContext, layer: &str, instance: &str) -> Result<()> {
    let definitions = ctx.open_definitions()?;
    let registry = ctx.open_instances();
    let found = layerform::has_dependants(&registry, &definitions, layer, instance)?;

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "dependants",
            "layer": layer,
            "instance": instance,
            "has_dependants": found,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    if found {
        println!("instance '{instance}' of layer '{layer}' has dependants");
    } else {
        println!("instance '{instance}' of layer '{layer}' has no dependants");
    }
    Ok(())
}
