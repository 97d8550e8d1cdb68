//! Target validation and tool path lookup
//!
//! Front-end scripts call these before acting on a target so they never
//! re-implement classification or path rules.

use std::path::PathBuf;

use crate::config::defaults::{PORTS_CONTAINER_ID, PORT_ACTIONS};
use crate::config::EngineConfig;
use crate::core::environment::{ports_root, resolve_root, ForcedMode};
use crate::core::ports::resolve_port_name;
use crate::core::search::{identify, normalize_target, TargetKind};
use crate::error::TargetError;

/// Whether `action` needs the ports container on disk when applied to a port
pub fn is_port_action(action: &str) -> bool {
    PORT_ACTIONS.contains(&action)
}

/// Classify `target` and check that `action` can run on it
pub fn validate_target(
    config: &EngineConfig,
    target: &str,
    action: Option<&str>,
) -> Result<TargetKind, TargetError> {
    if target.trim().is_empty() {
        return Err(TargetError::Empty);
    }

    let kind = identify(config, target).ok_or_else(|| TargetError::NotFound {
        target: target.to_string(),
    })?;

    if kind == TargetKind::Port && action.is_some_and(is_port_action) && !ports_root(config).exists()
    {
        return Err(TargetError::DependencyMissing {
            target: target.to_string(),
            dependency: PORTS_CONTAINER_ID.to_string(),
        });
    }

    Ok(kind)
}

/// Directory a tool or port lives in
///
/// Ports live inside the ports container; everything else resolves through
/// [`resolve_root`].
pub fn tool_path(config: &EngineConfig, tool: &str, forced: Option<ForcedMode>) -> PathBuf {
    if identify(config, tool) == Some(TargetKind::Port) {
        let name = resolve_port_name(config, &normalize_target(tool))
            .unwrap_or_else(|| tool.to_string());
        return resolve_root(config, PORTS_CONTAINER_ID, forced).join(name);
    }
    resolve_root(config, &normalize_target(tool), forced)
}
