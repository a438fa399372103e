//! Kill command handler

use anyhow::Result;

use super::CommandContext;

pub fn cmd_kill(ctx: &CommandContext, layer: &str, instance: &str) -> Result<()> {
    let definitions = ctx.open_definitions()?;
    let registry = ctx.open_instances();
    let removed = layerform::application::kill_instance(&registry, &definitions, layer, instance)?;

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "kill",
            "removed": crate::ui::render::instance_json(&removed),
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    println!("Removed instance '{instance}' of layer '{layer}'");
    Ok(())
}
