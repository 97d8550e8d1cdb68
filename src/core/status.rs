//! Installation status
//!
//! Combines directory existence, compiled artifacts, version markers and
//! the persisted host marker into a per-environment status.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{
    AICAOS_DRIVER_ARTIFACT, AICAOS_ID, AICAOS_LIBRARY_ARTIFACT, AICAOS_SDK_ADDON_ARTIFACT,
    PORTS_CONTAINER_ID, PORT_DIST_DIR, SDK_ID, SDK_LIBRARY_ARTIFACT,
};
use crate::config::EngineConfig;
use crate::core::environment::{
    effective_environment, installed_port_version, is_host_marked, resolve_root, Environment,
};
use crate::core::manifest::TargetType;
use crate::infra::filesystem::join_segments;

/// Status of a target in one environment
///
/// `NotPresent < SourceOnly < Installed`; `Broken` is not ordered against
/// the other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvStatus {
    /// Nothing on disk
    NotPresent,
    /// Sources present but not built/installed
    SourceOnly,
    /// Installed and usable
    Installed,
    /// Marked host-active but missing from the host workspace
    Broken,
}

impl EnvStatus {
    fn rank(self) -> Option<u8> {
        match self {
            Self::NotPresent => Some(0),
            Self::SourceOnly => Some(1),
            Self::Installed => Some(2),
            Self::Broken => None,
        }
    }

    /// Single-character code used in line output
    pub fn code(self) -> char {
        match self {
            Self::NotPresent => 'x',
            Self::SourceOnly => 'c',
            Self::Installed => 'o',
            Self::Broken => '!',
        }
    }

    /// Whether the target is installed
    pub fn is_installed(self) -> bool {
        self == Self::Installed
    }
}

impl PartialOrd for EnvStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for EnvStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPresent => write!(f, "not-present"),
            Self::SourceOnly => write!(f, "source-only"),
            Self::Installed => write!(f, "installed"),
            Self::Broken => write!(f, "broken"),
        }
    }
}

/// Status of a target in both environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    /// Container/system status
    pub system: EnvStatus,
    /// Host workspace status
    pub host: EnvStatus,
    /// Environment currently active for the target
    pub active: Environment,
}

impl StatusRecord {
    /// Status in `env`
    pub fn get(&self, env: Environment) -> EnvStatus {
        match env {
            Environment::System => self.system,
            Environment::Host => self.host,
        }
    }

    /// Whether the target is installed in either environment
    pub fn installed_anywhere(&self) -> bool {
        self.system.is_installed() || self.host.is_installed()
    }

    /// `system|host|active` line, e.g. `o|x|system`
    pub fn to_pipe_string(&self) -> String {
        format!("{}|{}|{}", self.system.code(), self.host.code(), self.active)
    }
}

/// SDK state the status of SDK addons depends on
///
/// Addons such as the audio-OS install into whichever SDK is active, so
/// their system status needs the SDK's environment as an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdkContext {
    /// Environment the SDK is active in
    pub active: Environment,
}

impl SdkContext {
    /// Detect the SDK's active environment from configuration and markers
    pub fn detect(config: &EngineConfig) -> Self {
        Self {
            active: effective_environment(config, SDK_ID, None),
        }
    }
}

/// Compute the status of `target_id` in both environments
pub fn compute_status(
    config: &EngineConfig,
    target_id: &str,
    target_type: &TargetType,
    sdk: &SdkContext,
) -> StatusRecord {
    let system = env_status(config, target_id, target_type, sdk, Environment::System);
    let mut host = env_status(config, target_id, target_type, sdk, Environment::Host);

    let host_active = is_host_marked(config, target_id);
    if host_active && host == EnvStatus::NotPresent {
        tracing::debug!("{target_id} is marked host-active but missing from the host workspace");
        host = EnvStatus::Broken;
    }

    StatusRecord {
        system,
        host,
        active: if host_active {
            Environment::Host
        } else {
            Environment::System
        },
    }
}

fn env_status(
    config: &EngineConfig,
    target_id: &str,
    target_type: &TargetType,
    sdk: &SdkContext,
    env: Environment,
) -> EnvStatus {
    if target_type.is_port() {
        return port_status(config, target_id, env);
    }

    let root = resolve_root(config, target_id, Some(env.forced()));
    match target_id {
        SDK_ID => artifact_status(&root, &[join_segments(&root, SDK_LIBRARY_ARTIFACT)]),
        AICAOS_ID => match env {
            Environment::Host => artifact_status(
                &root,
                &[
                    join_segments(&root, AICAOS_DRIVER_ARTIFACT),
                    join_segments(&root, AICAOS_LIBRARY_ARTIFACT),
                ],
            ),
            Environment::System => {
                let sdk_root = resolve_root(config, SDK_ID, Some(sdk.active.forced()));
                artifact_status(
                    &root,
                    &[join_segments(&sdk_root, AICAOS_SDK_ADDON_ARTIFACT)],
                )
            }
        },
        _ => {
            if root.exists() {
                EnvStatus::Installed
            } else {
                EnvStatus::NotPresent
            }
        }
    }
}

/// Installed when every artifact exists, else source-only when `root` exists
fn artifact_status(root: &Path, artifacts: &[PathBuf]) -> EnvStatus {
    if artifacts.iter().all(|a| a.exists()) {
        EnvStatus::Installed
    } else if root.exists() {
        EnvStatus::SourceOnly
    } else {
        EnvStatus::NotPresent
    }
}

fn port_status(config: &EngineConfig, lib_name: &str, env: Environment) -> EnvStatus {
    let forced = Some(env.forced());
    if installed_port_version(config, lib_name, forced).is_some() {
        return EnvStatus::Installed;
    }

    let ports = resolve_root(config, PORTS_CONTAINER_ID, forced);
    if ports.join(lib_name).join(PORT_DIST_DIR).exists() {
        EnvStatus::SourceOnly
    } else {
        EnvStatus::NotPresent
    }
}
