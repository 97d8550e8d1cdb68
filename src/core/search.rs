//! Discovery and search
//!
//! Classifies targets, locates their manifests and searches across the
//! registry and the ports container.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::config::defaults::{REGISTRY_EXTENSION, REGISTRY_SAMPLE_SUFFIX};
use crate::config::EngineConfig;
use crate::core::manifest::{parse_registry_record, ManifestRecord, TargetType};
use crate::core::ports::PortsTree;
use crate::infra::filesystem::{files_with_extension, find_file_named};

/// Reserved target aliases
const TARGET_ALIASES: &[(&str, &str)] = &[("sys", "system"), ("kosaio", "self")];

/// Category terms that expand to a port-name pattern
const PORT_CATEGORIES: &[(&[&str], &str)] = &[
    (
        &["opengl", "gl", "libgl", "3d", "graphics"],
        "(gl|kgl|parallax|tsunami|graphics)",
    ),
    (
        &["audio", "mp3", "sound", "music"],
        "(audio|tremor|sh4zam|vorbis|wav|mp3|ogg)",
    ),
    (&["network", "ip", "tcp"], "(network|lwip|tcp|ip)"),
];

/// What kind of thing a target is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Registry-managed tool
    Tool,
    /// Library port
    Port,
    /// Core component
    Core,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => write!(f, "tool"),
            Self::Port => write!(f, "port"),
            Self::Core => write!(f, "core"),
        }
    }
}

/// Lowercase a target identifier and apply reserved aliases
pub fn normalize_target(target: &str) -> String {
    let lower = target.trim().to_lowercase();
    TARGET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or(lower, |(_, canonical)| (*canonical).to_string())
}

fn registry_file_name(id: &str) -> String {
    format!("{id}.{REGISTRY_EXTENSION}")
}

/// Classify a target
///
/// Registry scripts are checked first, then diagnostics, then ports (exact
/// spelling before case-insensitive). First match wins.
pub fn identify(config: &EngineConfig, target: &str) -> Option<TargetKind> {
    let id = normalize_target(target);
    if id.is_empty() {
        return None;
    }
    let file_name = registry_file_name(&id);

    if let Some(path) = find_file_named(&config.registry_dir(), &file_name) {
        let declared_core = parse_registry_record(&path)
            .is_some_and(|record| record.target_type == TargetType::Core);
        tracing::debug!("{id} found in registry at {}", path.display());
        return Some(if declared_core {
            TargetKind::Core
        } else {
            TargetKind::Tool
        });
    }

    if config.diagnostics_dir().join(&file_name).is_file() {
        tracing::debug!("{id} found in diagnostics");
        return Some(TargetKind::Core);
    }

    let ports = PortsTree::discovery(config);
    if ports.resolve_name(&id).is_some() {
        tracing::debug!("{id} found in {}", ports.root().display());
        return Some(TargetKind::Port);
    }

    None
}

/// Path of the registry or diagnostics script describing `target`
pub fn locate_manifest(config: &EngineConfig, target: &str) -> Option<PathBuf> {
    let id = normalize_target(target);
    if id.is_empty() {
        return None;
    }
    let file_name = registry_file_name(&id);

    find_file_named(&config.registry_dir(), &file_name).or_else(|| {
        let diag = config.diagnostics_dir().join(&file_name);
        diag.is_file().then_some(diag)
    })
}

/// Search registry tools and ports
///
/// An empty query returns everything. Results are unique by id (first
/// occurrence wins) and sorted by type priority, then id.
pub fn search(config: &EngineConfig, query: &str) -> Vec<ManifestRecord> {
    let mut results = search_registry(config, query);
    results.extend(search_ports(config, query));

    let mut seen = HashSet::new();
    results.retain(|record| seen.insert(record.id.clone()));

    results.sort_by(|a, b| {
        a.target_type
            .priority()
            .cmp(&b.target_type.priority())
            .then_with(|| a.id.cmp(&b.id))
    });
    results
}

/// Registry records matching `query` on id, name, description or tags
pub fn search_registry(config: &EngineConfig, query: &str) -> Vec<ManifestRecord> {
    let query = query.to_lowercase();

    files_with_extension(&config.registry_dir(), REGISTRY_EXTENSION)
        .iter()
        .filter(|path| {
            !path
                .to_string_lossy()
                .ends_with(REGISTRY_SAMPLE_SUFFIX)
        })
        .filter_map(|path| parse_registry_record(path))
        .filter(|record| query.is_empty() || registry_matches(record, &query))
        .collect()
}

fn registry_matches(record: &ManifestRecord, query_lower: &str) -> bool {
    [
        &record.id,
        &record.name,
        &record.description,
        &record.tags,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query_lower))
}

/// Port records whose id or description matches `query`
pub fn search_ports(config: &EngineConfig, query: &str) -> Vec<ManifestRecord> {
    let ports = PortsTree::discovery(config);
    if !ports.exists() {
        return Vec::new();
    }

    let Some(pattern) = port_pattern(query) else {
        return Vec::new();
    };

    ports
        .records()
        .into_iter()
        .filter(|record| pattern.is_match(&record.id) || pattern.is_match(&record.description))
        .collect()
}

/// Case-insensitive pattern for a port query
///
/// Category terms expand to a fixed alternation. Other queries are used as
/// a pattern directly, or matched literally when they are not valid regex.
pub fn port_pattern(query: &str) -> Option<Regex> {
    let lower = query.trim().to_lowercase();
    let source = if lower.is_empty() {
        ".*".to_string()
    } else if let Some((_, expansion)) = PORT_CATEGORIES
        .iter()
        .find(|(terms, _)| terms.contains(&lower.as_str()))
    {
        (*expansion).to_string()
    } else if Regex::new(&lower).is_ok() {
        lower
    } else {
        tracing::debug!("'{lower}' is not a valid pattern, matching literally");
        regex::escape(&lower)
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .ok()
}
