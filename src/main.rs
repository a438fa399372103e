//! Layerform CLI
//!
//! Usage: layerform <COMMAND>
//!
//! Commands:
//!   configure   Replace the stored layer definitions
//!   list        List definitions or instances
//!   show        Show a layer and its resolved dependencies
//!   resolve     Print resolved dependencies in order
//!   dependants  Check whether an instance has dependants
//!   kill        Remove an instance that nothing depends on

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ListTarget};
use commands::CommandContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            let _ = ui::json::emit(ui::json::error_event(&err));
        } else {
            eprint!("{}", ui::error::format_error(&err));
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (mut config, warnings) = layerform::Config::discover(Some(project_root.as_path()))?;

    if let Some(path) = cli.definitions {
        config.storage.definitions = Some(path);
    }
    if let Some(path) = cli.instances {
        config.storage.instances = Some(path);
    }

    layerform::logging::init_logging(&config.log.filter, cli.verbose);
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown config key"
        );
    }

    let ctx = CommandContext::new(config, cli.json);

    match cli.command {
        Commands::Configure { file } => commands::configure::cmd_configure(&ctx, &file),
        Commands::List { target } => match target {
            ListTarget::Definitions => commands::list::cmd_list_definitions(&ctx),
            ListTarget::Instances { layer } => {
                commands::list::cmd_list_instances(&ctx, layer.as_deref())
            }
        },
        Commands::Show { layer } => commands::show::cmd_show(&ctx, &layer),
        Commands::Resolve { layer } => commands::resolve::cmd_resolve(&ctx, &layer),
        Commands::Dependants { layer, instance } => {
            commands::dependants::cmd_dependants(&ctx, &layer, &instance)
        }
        Commands::Kill { layer, instance } => commands::kill::cmd_kill(&ctx, &layer, &instance),
    }
}
