//! Command handlers
//!
//! Each handler opens the stores it needs from the resolved [`Config`], runs a
//! use case and renders the result as text or as a single NDJSON event.

pub mod configure;
pub mod dependants;
pub mod kill;
pub mod list;
pub mod resolve;
pub mod show;

use anyhow::Result;

use layerform::{Config, JsonDefinitionsRepository, JsonInstancesRepository};

pub struct CommandContext {
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    pub fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }

    pub fn open_definitions(&self) -> Result<JsonDefinitionsRepository> {
        Ok(JsonDefinitionsRepository::open(self.config.definitions_path())?)
    }

    pub fn open_instances(&self) -> JsonInstancesRepository {
        JsonInstancesRepository::with_path(self.config.instances_path())
    }
}
