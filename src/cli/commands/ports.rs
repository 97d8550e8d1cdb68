//! Port commands
//!
//! Implements `resolve-deps`, `port-info` and `resolve-port-name`.

use anyhow::Result;

use crate::config::EngineConfig;
use crate::core::ports::{resolve_port_name, PortsTree};
use crate::core::resolver::{resolve_install_order, DependencySource};
use crate::error::{KosaioError, TargetError};

/// Print the install order of `targets`, dependencies first
pub fn resolve_deps(config: &EngineConfig, targets: &[String]) -> Result<()> {
    let tree = PortsTree::active(config);
    tracing::debug!("Resolving {targets:?} against {}", tree.root().display());

    let order = resolve_install_order(&tree, targets).map_err(KosaioError::from)?;
    println!("{}", order.join(" "));
    Ok(())
}

/// Print `KEY=value` build metadata of a port in the active container
pub fn port_info(config: &EngineConfig, query: &str) -> Result<()> {
    let tree = PortsTree::active(config);
    let record = tree.record(query).ok_or_else(|| {
        KosaioError::from(TargetError::NotFound {
            target: query.to_string(),
        })
    })?;
    let details = record.port.unwrap_or_default();

    println!("PORTNAME={}", record.id);
    println!("SHORT_DESC={}", record.description);
    println!("PORTVERSION={}", details.version);
    println!("GIT_REPOSITORY={}", details.repository);
    println!("GIT_BRANCH={}", details.branch);
    println!(
        "DEPENDENCIES={}",
        tree.declared_dependencies(query).join(" ")
    );
    Ok(())
}

/// Print the on-disk spelling of a port name
pub fn resolve_name(config: &EngineConfig, name: &str) -> Result<()> {
    let resolved = resolve_port_name(config, name).ok_or_else(|| {
        KosaioError::from(TargetError::NotFound {
            target: name.to_string(),
        })
    })?;
    println!("{resolved}");
    Ok(())
}
