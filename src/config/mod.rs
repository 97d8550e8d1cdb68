//! Engine configuration
//!
//! [`EngineConfig`] is built once per process from the environment and
//! passed by reference to every component. Nothing in the engine reads the
//! process environment after startup.
//!
//! Environment variables:
//! - `KOSAIO_DIR` - kosaio scripts checkout (registry and diagnostics)
//! - `DREAMCAST_SDK` - system (container) SDK root
//! - `PROJECTS_DIR` - workspace projects root; the host root is `<it>/kosaio-dev`
//! - `KOSAIO_DEV_MODE` - `1` forces host mode, `0` forces system mode
//! - `KOS_PORTS_DIR` - explicit ports container path (auto mode only)
//! - `KOSAIO_STATE_DIR` - marker directory, defaults to `~/.kosaio/states`

pub mod defaults;

use std::env;
use std::path::{Path, PathBuf};

use crate::core::environment::ForcedMode;
use defaults::{DEFAULT_KOSAIO_DIR, DEFAULT_PROJECTS_ROOT, DEFAULT_SDK_ROOT, PRODUCT_NAME};

/// Environment variable names
pub const ENV_KOSAIO_DIR: &str = "KOSAIO_DIR";
pub const ENV_SDK_ROOT: &str = "DREAMCAST_SDK";
pub const ENV_PROJECTS_DIR: &str = "PROJECTS_DIR";
pub const ENV_DEV_MODE: &str = "KOSAIO_DEV_MODE";
pub const ENV_PORTS_DIR: &str = "KOS_PORTS_DIR";
pub const ENV_STATE_DIR: &str = "KOSAIO_STATE_DIR";

/// Resolved engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    kosaio_dir: PathBuf,
    sdk_root: PathBuf,
    dev_root: PathBuf,
    state_dir: PathBuf,
    default_mode: Option<ForcedMode>,
    ports_override: Option<PathBuf>,
}

impl EngineConfig {
    /// Create a configuration from explicit roots, with no forced mode and
    /// no ports override
    pub fn new(
        kosaio_dir: impl Into<PathBuf>,
        sdk_root: impl Into<PathBuf>,
        projects_root: impl AsRef<Path>,
        state_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kosaio_dir: kosaio_dir.into(),
            sdk_root: sdk_root.into(),
            dev_root: dev_root_for(projects_root.as_ref()),
            state_dir: state_dir.into(),
            default_mode: None,
            ports_override: None,
        }
    }

    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        let kosaio_dir = env_path(ENV_KOSAIO_DIR).unwrap_or_else(|| PathBuf::from(DEFAULT_KOSAIO_DIR));
        let sdk_root = env_path(ENV_SDK_ROOT).unwrap_or_else(|| PathBuf::from(DEFAULT_SDK_ROOT));
        let projects_root =
            env_path(ENV_PROJECTS_DIR).unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECTS_ROOT));
        let state_dir = env_path(ENV_STATE_DIR).unwrap_or_else(default_state_dir);

        let default_mode = env_value(ENV_DEV_MODE).and_then(|v| ForcedMode::from_flag(&v));
        let ports_override = env_path(ENV_PORTS_DIR);

        let config = Self::new(kosaio_dir, sdk_root, projects_root, state_dir)
            .with_default_mode(default_mode)
            .with_ports_override(ports_override);

        tracing::debug!(?config, "Loaded engine configuration");
        config
    }

    /// Set the process-wide default mode
    #[must_use]
    pub fn with_default_mode(mut self, mode: Option<ForcedMode>) -> Self {
        self.default_mode = mode;
        self
    }

    /// Set the explicit ports container override
    #[must_use]
    pub fn with_ports_override(mut self, path: Option<PathBuf>) -> Self {
        self.ports_override = path;
        self
    }

    /// Root of the kosaio scripts checkout
    pub fn kosaio_dir(&self) -> &Path {
        &self.kosaio_dir
    }

    /// System (container) SDK root
    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    /// Host workspace root (`<projects_root>/kosaio-dev`)
    pub fn dev_root(&self) -> &Path {
        &self.dev_root
    }

    /// Directory holding `<tool>_dev` marker files
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Process-wide forced mode, `None` for auto
    pub fn default_mode(&self) -> Option<ForcedMode> {
        self.default_mode
    }

    /// Explicit ports container path
    pub fn ports_override(&self) -> Option<&Path> {
        self.ports_override.as_deref()
    }

    /// Registry tree holding `*.sh` manifests
    pub fn registry_dir(&self) -> PathBuf {
        self.kosaio_dir.join("scripts").join("registry")
    }

    /// Diagnostics directory holding core component scripts
    pub fn diagnostics_dir(&self) -> PathBuf {
        self.kosaio_dir
            .join("scripts")
            .join("engine")
            .join("diagnostics")
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn dev_root_for(projects_root: &Path) -> PathBuf {
    projects_root.join(format!("{PRODUCT_NAME}-dev"))
}

/// `~/.kosaio/states`, falling back to the working directory without a home
fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{PRODUCT_NAME}"))
        .join("states")
}

/// Read an environment variable, treating empty values as unset
fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env_value(name).map(PathBuf::from)
}
