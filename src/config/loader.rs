//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LayerformError, LayerformResult};
use crate::infrastructure::fs::{expand_home, layerform_home_dir};

use super::types::Config;

pub const DEFINITIONS_PATH_ENV: &str = "LAYERFORM_DEFINITIONS_PATH";
pub const INSTANCES_PATH_ENV: &str = "LAYERFORM_INSTANCES_PATH";
pub const LOG_ENV: &str = "LAYERFORM_LOG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative storage paths are taken relative to the directory holding `path`.
pub fn load_with_warnings(path: &Path) -> LayerformResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (mut config, warnings) = parse_with_warnings(&content, path)?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.storage.definitions = config.storage.definitions.map(|p| anchor_path(&p, base));
    config.storage.instances = config.storage.instances.map(|p| anchor_path(&p, base));

    Ok((config, warnings))
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> LayerformResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayerformError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config (`<root>/.layerform/config.toml`) wins over user config
/// (`<config dir>/layerform/config.toml`); without either, defaults are used.
/// Environment overrides apply last. A config file that exists but cannot be
/// parsed is an error.
pub fn discover(project_root: Option<&Path>) -> LayerformResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(".layerform/config.toml"))
        .into_iter()
        .chain(user_config_dir().map(|dir| dir.join("layerform/config.toml")));

    for candidate in candidates {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (`LAYERFORM_*` prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(path) = var(DEFINITIONS_PATH_ENV).filter(|v| !v.is_empty()) {
        config.storage.definitions = Some(expand_home(Path::new(&path)));
    }

    if let Some(path) = var(INSTANCES_PATH_ENV).filter(|v| !v.is_empty()) {
        config.storage.instances = Some(expand_home(Path::new(&path)));
    }

    if let Some(filter) = var(LOG_ENV).filter(|v| !v.is_empty()) {
        config.log.filter = filter;
    }

    config
}

fn anchor_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// XDG config directory, falling back to `~/.config`.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| layerform_home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["storage", "definitions", "instances", "log", "filter"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn apply_overrides_for_test(config: Config, vars: &[(&str, &str)]) -> Config {
    apply_overrides(config, |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}
