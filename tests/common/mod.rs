//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Lays out a throwaway kosaio installation (scripts checkout, system SDK,
/// host projects root and state directory) and runs the engine binary
/// against it with a clean environment.
pub struct TestWorkspace {
    /// Temporary directory holding every root
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Root of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// kosaio scripts checkout
    pub fn kosaio_dir(&self) -> PathBuf {
        self.path().join("kosaio")
    }

    /// System SDK root
    pub fn sdk_root(&self) -> PathBuf {
        self.path().join("sdk")
    }

    /// Host workspace root (`<projects>/kosaio-dev`)
    pub fn dev_root(&self) -> PathBuf {
        self.path().join("projects").join("kosaio-dev")
    }

    /// Host-mode marker directory
    pub fn state_dir(&self) -> PathBuf {
        self.path().join("states")
    }

    /// Create a file relative to the workspace root
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory relative to the workspace root
    pub fn create_dir(&self, name: &str) {
        std::fs::create_dir_all(self.path().join(name)).expect("Failed to create directory");
    }

    /// Add a registry script under `kosaio/scripts/registry/<category>/<id>.sh`
    pub fn add_registry_tool(&self, category: &str, id: &str, kind: &str, desc: &str) {
        let script = format!(
            "#!/bin/bash\nID=\"{id}\"\nNAME=\"{id}\"\nDESC=\"{desc}\"\nTAGS=\"{category}\"\nTYPE=\"{kind}\"\n"
        );
        self.create_file(&format!("kosaio/scripts/registry/{category}/{id}.sh"), &script);
    }

    /// Add a port to the system ports container
    pub fn add_port(&self, name: &str, desc: &str, deps: &[&str]) {
        let makefile = format!(
            "PORTNAME = {name}\nPORTVERSION = 1.0.0\nSHORT_DESC = {desc}\nDEPENDENCIES = {}\n",
            deps.join(" ")
        );
        self.create_file(&format!("sdk/kos-ports/{name}/Makefile"), &makefile);
    }

    /// Persist the host-mode marker for `tool`
    pub fn mark_host(&self, tool: &str) {
        self.create_file(&format!("states/{tool}_dev"), "");
    }

    /// Engine command configured for this workspace
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_kosaio-engine"));
        cmd.env("KOSAIO_DIR", self.kosaio_dir())
            .env("DREAMCAST_SDK", self.sdk_root())
            .env("PROJECTS_DIR", self.path().join("projects"))
            .env("KOSAIO_STATE_DIR", self.state_dir())
            .env_remove("KOSAIO_DEV_MODE")
            .env_remove("KOS_PORTS_DIR")
            .env_remove("KOSAIO_LOG");
        cmd
    }

    /// Run the engine with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute kosaio-engine")
    }

    /// Run the engine with `args` and extra environment variables
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.command();
        for (key, value) in vars {
            cmd.env(key, value);
        }
        cmd.args(args)
            .output()
            .expect("Failed to execute kosaio-engine")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
