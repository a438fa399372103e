//! Terminal output for the CLI

pub mod error;
pub mod json;
pub mod render;
