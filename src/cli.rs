use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Layerform - layer definitions, dependency resolution and instance safety checks
#[derive(Parser, Debug)]
#[command(name = "layerform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable NDJSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Definitions file (overrides config and LAYERFORM_DEFINITIONS_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub definitions: Option<PathBuf>,

    /// Instance registry file (overrides config and LAYERFORM_INSTANCES_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub instances: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the stored layer definitions with the contents of a file
    Configure {
        /// Definitions document (JSON array or `{ "layers": [...] }`)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List layer definitions or instances
    List {
        #[command(subcommand)]
        target: ListTarget,
    },

    /// Show a layer definition and its resolved dependencies
    Show {
        /// Layer name
        layer: String,
    },

    /// Print the transitive dependencies of a layer in resolution order
    Resolve {
        /// Layer name
        layer: String,
    },

    /// Check whether any instance depends on the given instance
    Dependants {
        /// Layer name
        layer: String,

        /// Instance name
        instance: String,
    },

    /// Remove an instance, refusing while another instance depends on it
    Kill {
        /// Layer name
        layer: String,

        /// Instance name
        instance: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// All layer definitions
    Definitions,

    /// Recorded layer instances
    Instances {
        /// Only instances of this layer
        #[arg(long)]
        layer: Option<String>,
    },
}
