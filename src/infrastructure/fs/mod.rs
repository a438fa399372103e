//! File System Helpers
//!
//! Atomic replacement and home directory resolution shared by the file-backed
//! repositories and the config loader.

mod atomic;
mod home;

pub use atomic::write_atomic;
pub use home::{expand_home, layerform_home_dir, LAYERFORM_TEST_HOME_VAR};
