//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests that need an isolated
//! home set `LAYERFORM_TEST_HOME` instead. Every path layerform derives from the
//! home directory (default definitions and instances files, user config) goes
//! through [`layerform_home_dir`].

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of the home directory.
pub const LAYERFORM_TEST_HOME_VAR: &str = "LAYERFORM_TEST_HOME";

/// Home directory used for layerform-internal paths.
///
/// Returns `None` when `LAYERFORM_TEST_HOME` is unset and the system home
/// cannot be resolved.
pub fn layerform_home_dir() -> Option<PathBuf> {
    std::env::var(LAYERFORM_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` using [`layerform_home_dir`].
pub fn expand_home(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    let Some(home) = layerform_home_dir() else {
        return path.to_path_buf();
    };

    if s == "~" {
        return home;
    }
    match s.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => path.to_path_buf(),
    }
}
