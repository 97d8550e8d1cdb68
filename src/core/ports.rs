//! Ports container access
//!
//! Enumerates the ports inside a ports container, resolves loosely typed
//! port names to their on-disk spelling and reads per-port metadata.

use std::path::{Path, PathBuf};

use crate::config::defaults::{PORTS_SKIP_DIRS, PORT_MAKEFILE};
use crate::config::EngineConfig;
use crate::core::environment::{discovery_ports_root, ports_root};
use crate::core::manifest::{parse_port_record, read_dependencies, ManifestRecord};
use crate::core::resolver::DependencySource;
use crate::infra::filesystem::list_subdirs;

/// A ports container rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortsTree {
    root: PathBuf,
}

impl PortsTree {
    /// Open the ports container at `root`; it may not exist
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ports container under the active mode
    pub fn active(config: &EngineConfig) -> Self {
        Self::new(ports_root(config))
    }

    /// Ports container used for discovery
    pub fn discovery(config: &EngineConfig) -> Self {
        Self::new(discovery_ports_root(config))
    }

    /// Root directory of the container
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the container exists on disk
    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Build description of `lib_name` (may not exist)
    pub fn makefile(&self, lib_name: &str) -> PathBuf {
        self.root.join(lib_name).join(PORT_MAKEFILE)
    }

    /// Whether `lib_name` is a port directory spelled exactly like that
    pub fn has_port(&self, lib_name: &str) -> bool {
        !lib_name.is_empty() && self.makefile(lib_name).is_file()
    }

    /// Port names in the container, sorted, skipping support directories
    pub fn port_names(&self) -> Vec<String> {
        list_subdirs(&self.root)
            .iter()
            .filter(|dir| dir.join(PORT_MAKEFILE).is_file())
            .filter_map(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .filter(|name| !PORTS_SKIP_DIRS.contains(&name.as_str()))
            .collect()
    }

    /// Parsed records for every port in the container
    pub fn records(&self) -> Vec<ManifestRecord> {
        self.port_names()
            .iter()
            .filter_map(|name| parse_port_record(&self.makefile(name)))
            .collect()
    }

    /// Parsed record of a single port
    pub fn record(&self, lib_name: &str) -> Option<ManifestRecord> {
        if !self.has_port(lib_name) {
            return None;
        }
        parse_port_record(&self.makefile(lib_name))
    }

    /// Canonical on-disk name for `input`
    ///
    /// Exact spelling wins; otherwise the first directory whose name matches
    /// case-insensitively and holds a `Makefile`.
    pub fn resolve_name(&self, input: &str) -> Option<String> {
        if self.has_port(input) {
            return Some(input.to_string());
        }

        let wanted = input.to_lowercase();
        list_subdirs(&self.root)
            .iter()
            .filter(|dir| dir.join(PORT_MAKEFILE).is_file())
            .filter_map(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .find(|name| name.to_lowercase() == wanted)
    }
}

impl DependencySource for PortsTree {
    fn declared_dependencies(&self, id: &str) -> Vec<String> {
        read_dependencies(&self.makefile(id))
    }
}

/// Declared dependencies of `port_id` in the active ports container
pub fn get_declared_dependencies(config: &EngineConfig, port_id: &str) -> Vec<String> {
    PortsTree::active(config).declared_dependencies(port_id)
}

/// Resolve a loosely typed port name against the discovery container
pub fn resolve_port_name(config: &EngineConfig, input: &str) -> Option<String> {
    PortsTree::discovery(config).resolve_name(input)
}
