//! Show command handler

use anyhow::Result;

use layerform::application::LayerQueryUseCase;

use super::CommandContext;

pub fn cmd_show(ctx: &CommandContext, layer: &str) -> Result<()> {
    let definitions = ctx.open_definitions()?;
    let details = LayerQueryUseCase::new(&definitions).describe(layer)?;

    if ctx.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "show",
            "layer": details,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    print!("{}", crate::ui::render::render_details(&details));
    Ok(())
}
