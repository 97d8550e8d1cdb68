//! Single-target commands
//!
//! Implements `get-type`, `validate-target`, `get-tool-path`,
//! `get-manifest-path` and `status`. Only the requested value goes to
//! stdout so shell callers can capture it.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_json, OutputConfig};
use crate::config::EngineConfig;
use crate::core::environment::ForcedMode;
use crate::core::manifest::{parse_registry_record, TargetType};
use crate::core::ports::resolve_port_name;
use crate::core::search::{identify, locate_manifest, normalize_target, TargetKind};
use crate::core::status::{compute_status, SdkContext, StatusRecord};
use crate::core::validate::{tool_path as resolve_tool_path, validate_target};
use crate::error::{KosaioError, TargetError};

fn not_found(target: &str) -> KosaioError {
    KosaioError::from(TargetError::NotFound {
        target: target.to_string(),
    })
}

/// Print the kind of `query`
pub fn get_type(config: &EngineConfig, query: &str) -> Result<()> {
    let kind = identify(config, query).ok_or_else(|| not_found(query))?;
    println!("{kind}");
    Ok(())
}

/// Validate `target` for `action` and print its kind
///
/// A port whose container is missing still prints `port` before failing
/// with the dependency error.
pub fn validate(config: &EngineConfig, target: &str, action: Option<&str>) -> Result<()> {
    match validate_target(config, target, action) {
        Ok(kind) => {
            println!("{kind}");
            Ok(())
        }
        Err(err @ TargetError::DependencyMissing { .. }) => {
            println!("{}", TargetKind::Port);
            Err(KosaioError::from(err).into())
        }
        Err(err) => Err(KosaioError::from(err).into()),
    }
}

/// Print the directory `tool` lives in
pub fn tool_path(config: &EngineConfig, tool: &str, mode: Option<&str>) -> Result<()> {
    let forced = mode.and_then(ForcedMode::from_name);
    println!("{}", resolve_tool_path(config, tool, forced).display());
    Ok(())
}

/// Print the manifest script path of `target`
pub fn manifest_path(config: &EngineConfig, target: &str) -> Result<()> {
    let path = locate_manifest(config, target).ok_or_else(|| not_found(target))?;
    println!("{}", path.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatusEntry {
    id: String,
    #[serde(rename = "type")]
    target_type: TargetType,
    #[serde(flatten)]
    status: StatusRecord,
}

/// Print the installation status of `target`
pub fn status(config: &EngineConfig, output: &OutputConfig, target: &str) -> Result<()> {
    let (id, target_type) = describe(config, target).ok_or_else(|| not_found(target))?;
    let sdk = SdkContext::detect(config);
    let status = compute_status(config, &id, &target_type, &sdk);

    if output.json {
        return print_json(&StatusEntry {
            id,
            target_type,
            status,
        });
    }

    println!("{}", status.to_pipe_string());
    Ok(())
}

/// Canonical id and declared type of `target`
fn describe(config: &EngineConfig, target: &str) -> Option<(String, TargetType)> {
    let id = normalize_target(target);
    match identify(config, &id)? {
        TargetKind::Port => {
            let name = resolve_port_name(config, &id)?;
            Some((name, TargetType::Port))
        }
        kind => {
            let declared = locate_manifest(config, &id)
                .and_then(|path| parse_registry_record(&path))
                .map(|record| record.target_type);
            let target_type = declared.unwrap_or(match kind {
                TargetKind::Core => TargetType::Core,
                _ => TargetType::Tool,
            });
            Some((id, target_type))
        }
    }
}
