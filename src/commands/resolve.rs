//! Resolve command handler

use anyhow::Result;

use layerform::application::LayerQueryUseCase;

use super::CommandContext;

pub fn cmd_resolve(ctx: &CommandContext, layer: &str) -> Result<()> {
    let definitions = ctx.open_definitions()?;
    let resolved = LayerQueryUseCase::new(&definitions).resolve(layer)?;

    if ctx.json {
        let names: Vec<&str> = resolved.iter().map(|l| l.name.as_str()).collect();
        let out = serde_json::json!({
            "event": "data",
            "command": "resolve",
            "layer": layer,
            "dependencies": names,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    for summary in &resolved {
        println!("{}", summary.name);
    }
    Ok(())
}
