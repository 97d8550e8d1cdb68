//! Environment resolution
//!
//! Decides, for any tool identifier, whether the host workspace or the
//! system SDK is authoritative and which directory the tool lives in.
//!
//! Mode precedence is fixed: explicit per-call mode, then the process-wide
//! default mode, then the persisted `<tool>_dev` marker, then system.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::defaults::{
    CORE_TOOLCHAIN_IDS, EXTRAS_SUBDIR, HOST_MARKER_SUFFIX, PORTS_CONTAINER_ID, PORT_VERSION_DIR,
};
use crate::config::EngineConfig;
use crate::infra::filesystem::{join_segments, read_optional};

/// A mode forced by the caller or by the process environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForcedMode {
    /// Always resolve into the host workspace
    Host,
    /// Always resolve into the system SDK
    System,
}

impl ForcedMode {
    /// Parse the `KOSAIO_DEV_MODE` flag (`1` host, `0` system)
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::Host),
            "0" => Some(Self::System),
            _ => None,
        }
    }

    /// Parse the CLI mode name (`dev` host, `sys` system)
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim() {
            "dev" => Some(Self::Host),
            "sys" => Some(Self::System),
            _ => None,
        }
    }

    /// The environment this mode selects
    pub fn environment(self) -> Environment {
        match self {
            Self::Host => Environment::Host,
            Self::System => Environment::System,
        }
    }
}

/// One of the two parallel installation environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Shared SDK (container) install
    System,
    /// Developer workspace
    Host,
}

impl Environment {
    /// The forced mode that pins resolution to this environment
    pub fn forced(self) -> ForcedMode {
        match self {
            Self::Host => ForcedMode::Host,
            Self::System => ForcedMode::System,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Host => write!(f, "host"),
        }
    }
}

/// Path of the marker file that flags `tool_id` as host-active
pub fn marker_path(config: &EngineConfig, tool_id: &str) -> PathBuf {
    config
        .state_dir()
        .join(format!("{tool_id}{HOST_MARKER_SUFFIX}"))
}

/// Whether the persisted marker flags `tool_id` as host-active
pub fn is_host_marked(config: &EngineConfig, tool_id: &str) -> bool {
    marker_path(config, tool_id).exists()
}

/// Effective environment for `tool_id` after applying mode precedence
pub fn effective_environment(
    config: &EngineConfig,
    tool_id: &str,
    forced: Option<ForcedMode>,
) -> Environment {
    if let Some(mode) = forced.or(config.default_mode()) {
        return mode.environment();
    }
    if is_host_marked(config, tool_id) {
        Environment::Host
    } else {
        Environment::System
    }
}

/// Resolve the directory `tool_id` lives in
///
/// Always returns a path; it may not exist.
pub fn resolve_root(config: &EngineConfig, tool_id: &str, forced: Option<ForcedMode>) -> PathBuf {
    if tool_id == PORTS_CONTAINER_ID && forced.is_none() {
        if let Some(path) = config.ports_override() {
            return path.to_path_buf();
        }
    }

    match effective_environment(config, tool_id, forced) {
        Environment::Host => config.dev_root().join(tool_id),
        Environment::System => {
            if CORE_TOOLCHAIN_IDS.contains(&tool_id) {
                config.sdk_root().join(tool_id)
            } else {
                config.sdk_root().join(EXTRAS_SUBDIR).join(tool_id)
            }
        }
    }
}

/// Ports container under the active mode
pub fn ports_root(config: &EngineConfig) -> PathBuf {
    resolve_root(config, PORTS_CONTAINER_ID, None)
}

/// Ports container used for discovery and enumeration
///
/// Prefers the system copy when it exists, else the host copy. Never use
/// this to decide where something gets installed.
pub fn discovery_ports_root(config: &EngineConfig) -> PathBuf {
    let system = config.sdk_root().join(PORTS_CONTAINER_ID);
    if system.exists() {
        return system;
    }
    resolve_root(config, PORTS_CONTAINER_ID, Some(ForcedMode::Host))
}

/// Installed version of a port, read from the ports container's version marker
pub fn installed_port_version(
    config: &EngineConfig,
    lib_name: &str,
    forced: Option<ForcedMode>,
) -> Option<String> {
    let root = resolve_root(config, PORTS_CONTAINER_ID, forced);
    let marker = join_segments(&root, PORT_VERSION_DIR).join(lib_name);
    if !marker.exists() {
        return None;
    }
    read_optional(&marker).map(|v| v.trim().to_string())
}
