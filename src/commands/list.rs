//! List command handlers

use anyhow::Result;

use layerform::application::LayerQueryUseCase;
use layerform::InstancesBackend;

use super::CommandContext;
use crate::ui::render;

pub fn cmd_list_definitions(ctx: &CommandContext) -> Result<()> {
    let definitions = ctx.open_definitions()?;
    let layers = LayerQueryUseCase::new(&definitions).list()?;

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "list-definitions",
            "layers": layers,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    print!("{}", render::render_definitions(&layers));
    Ok(())
}

pub fn cmd_list_instances(ctx: &CommandContext, layer: Option<&str>) -> Result<()> {
    let registry = ctx.open_instances();
    let instances = match layer {
        Some(name) => registry.list_instances_by_layer(name)?,
        None => registry.list_instances()?,
    };

    if ctx.json {
        let records: Vec<_> = instances.iter().map(render::instance_json).collect();
        let out = serde_json::json!({
            "event": "data",
            "command": "list-instances",
            "layer": layer,
            "instances": records,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    print!("{}", render::render_instances(&instances));
    Ok(())
}
