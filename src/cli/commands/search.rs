//! Search and listing commands
//!
//! Implements `search`, `update-cache`, `list-ports` and
//! `get-installed-ids`.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{legend, print_json, render_table, status, status_pills, OutputConfig};
use crate::config::defaults::{DEFAULT_PORT_DESCRIPTION, PORTS_CONTAINER_ID};
use crate::config::EngineConfig;
use crate::core::manifest::{ManifestRecord, TargetType};
use crate::core::ports::PortsTree;
use crate::core::search;
use crate::core::status::{compute_status, EnvStatus, SdkContext, StatusRecord};

const SEARCH_COLUMNS: &[(&str, usize)] = &[
    ("TYPE", 12),
    ("ID", 20),
    ("CONT", 4),
    ("HOST", 4),
    ("DESCRIPTION", 40),
];

const PORT_COLUMNS: &[(&str, usize)] = &[
    ("LIBRARY", 20),
    ("CONT", 6),
    ("HOST", 6),
    ("DESCRIPTION", 40),
];

/// A search hit with its status, as emitted by `--json`
#[derive(Debug, Serialize)]
struct SearchEntry<'a> {
    #[serde(flatten)]
    record: &'a ManifestRecord,
    status: StatusRecord,
}

/// Execute the search command
pub fn execute(
    config: &EngineConfig,
    output: &OutputConfig,
    query: &str,
    installed_only: bool,
) -> Result<()> {
    tracing::info!("Searching for '{query}'...");

    let results = search::search(config, query);
    let sdk = SdkContext::detect(config);

    let entries: Vec<SearchEntry<'_>> = results
        .iter()
        .map(|record| SearchEntry {
            record,
            status: compute_status(config, &record.id, &record.target_type, &sdk),
        })
        .filter(|entry| !installed_only || is_present(&entry.status))
        .collect();

    tracing::debug!("{} of {} result(s) shown", entries.len(), results.len());

    if output.json {
        return print_json(&entries);
    }

    print!("{}", legend());
    println!();

    if entries.is_empty() {
        if installed_only && !results.is_empty() {
            println!("  No installed packages found matching query.");
        } else {
            println!("  No matches found in Registry or KOS-PORTS.");
        }
        println!();
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let (cont, host) = status_pills(&entry.status);
            vec![
                format!("[{}]", entry.record.target_type.as_str().to_uppercase()),
                entry.record.id.clone(),
                cont,
                host,
                entry.record.description.clone(),
            ]
        })
        .collect();
    print!("{}", render_table(SEARCH_COLUMNS, &rows));

    if !output.quiet && !PortsTree::active(config).exists() {
        println!();
        println!(
            "  {} KOS-PORTS repository missing. Individual libraries (ports) are hidden.",
            status::INFO
        );
        println!("  Run 'kosaio clone {PORTS_CONTAINER_ID}' to see available libraries.");
    }

    Ok(())
}

/// Anything on disk in either environment
fn is_present(status: &StatusRecord) -> bool {
    status.system != EnvStatus::NotPresent || status.host != EnvStatus::NotPresent
}

/// Print every known target as one pipe-delimited record per line
pub fn update_cache(config: &EngineConfig) -> Result<()> {
    for record in search::search(config, "") {
        println!("{}", record.to_pipe_string());
    }
    Ok(())
}

/// List the ports of the active container with their status
pub fn list_ports(config: &EngineConfig, output: &OutputConfig) -> Result<()> {
    let tree = PortsTree::active(config);
    if !tree.exists() {
        tracing::warn!("Ports container not found at {}", tree.root().display());
        return Ok(());
    }

    let sdk = SdkContext::detect(config);
    let entries: Vec<(String, StatusRecord, String)> = tree
        .port_names()
        .into_iter()
        .map(|name| {
            let status = compute_status(config, &name, &TargetType::Port, &sdk);
            let description = tree
                .record(&name)
                .map_or_else(|| DEFAULT_PORT_DESCRIPTION.to_string(), |r| r.description);
            (name, status, description)
        })
        .collect();

    if output.json {
        #[derive(Serialize)]
        struct PortEntry<'a> {
            id: &'a str,
            description: &'a str,
            status: StatusRecord,
        }
        let json: Vec<PortEntry<'_>> = entries
            .iter()
            .map(|(id, status, description)| PortEntry {
                id,
                description,
                status: *status,
            })
            .collect();
        return print_json(&json);
    }

    let rows: Vec<Vec<String>> = entries
        .into_iter()
        .map(|(name, status, description)| {
            let (cont, host) = status_pills(&status);
            vec![name, cont, host, description]
        })
        .collect();
    print!("{}", render_table(PORT_COLUMNS, &rows));

    Ok(())
}

/// Print the ids of every target installed in either environment
pub fn installed_ids(config: &EngineConfig) -> Result<()> {
    let sdk = SdkContext::detect(config);
    let ids: Vec<String> = search::search(config, "")
        .into_iter()
        .filter(|record| {
            compute_status(config, &record.id, &record.target_type, &sdk).installed_anywhere()
        })
        .map(|record| record.id)
        .collect();

    println!("{}", ids.join(" "));
    Ok(())
}
