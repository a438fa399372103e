//! Common test utilities for layerform CLI tests.
//!
//! `TestEnv` gives every test its own project directory and home directory,
//! and runs the `layerform` binary with `LAYERFORM_TEST_HOME` and
//! `XDG_CONFIG_HOME` pointed into the isolated home.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a layerform CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single NDJSON event.
    pub fn json(&self) -> serde_json::Value {
        let line = self.stdout.lines().next().unwrap_or_default();
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not a JSON event ({e}):\n{}", self.stdout))
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Default definitions file under the isolated home.
    pub fn definitions_path(&self) -> PathBuf {
        self.home_path(".layerform/layerform.definitions.json")
    }

    /// Default instance registry under the isolated home.
    pub fn instances_path(&self) -> PathBuf {
        self.home_path(".layerform/layerform.instances.json")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative), content)
    }

    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.home_path(relative), content)
    }

    /// Write the definitions document to the project and run `configure` on it.
    pub fn configure(&self, document: &str) -> TestResult {
        let file = self.write_project_file("layers.json", document);
        let result = self.run(&["configure", "--file", &file.to_string_lossy()]);
        assert!(result.success, "configure failed:\n{}", result.stderr);
        result
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_layerform"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("LAYERFORM_TEST_HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("HOME", self.home_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("LAYERFORM_DEFINITIONS_PATH")
            .env_remove("LAYERFORM_INSTANCES_PATH")
            .env_remove("LAYERFORM_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute layerform");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// Four-layer graph used across CLI tests.
pub const LAYERS_DOCUMENT: &str = r#"{
  "layers": [
    { "name": "network" },
    { "name": "database", "dependencies": ["network"] },
    { "name": "cache", "dependencies": ["network"] },
    { "name": "app", "dependencies": ["database", "cache"] }
  ]
}"#;
