//! Manifest records and their parsers
//!
//! Two on-disk formats describe targets:
//!
//! - registry scripts (`*.sh`) with shell-style `KEY="value"` assignments
//! - port build descriptions (`Makefile`) with `KEY = value` assignments
//!
//! Both are scraped line by line with regular expressions and turned into a
//! [`ManifestRecord`]. Nothing outside this module ever sees the raw text.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::defaults::{DEFAULT_PORT_DESCRIPTION, DEFAULT_PORT_VERSION, PORT_TAGS};
use crate::infra::filesystem::read_optional;

/// Field delimiter of the line-oriented record format
pub const PIPE: char = '|';

/// Declared type of a target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Core component (SDK, diagnostics)
    Core,
    /// Developer tool
    Tool,
    /// Library shipped through the registry
    Lib,
    /// Emulator
    Emulator,
    /// Loader / uploader
    Loader,
    /// Library port built from the ports container
    Port,
    /// Any type the registry declares that the engine has no rule for
    Other(String),
}

impl TargetType {
    /// Parse a manifest `TYPE` value (case-insensitive)
    pub fn parse(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "core" => Self::Core,
            "tool" => Self::Tool,
            "lib" => Self::Lib,
            "emulator" => Self::Emulator,
            "loader" => Self::Loader,
            "port" => Self::Port,
            _ => Self::Other(lower),
        }
    }

    /// Sort tier used by search results
    pub fn priority(&self) -> u8 {
        match self {
            Self::Core => 1,
            Self::Tool => 2,
            Self::Lib => 3,
            Self::Emulator => 4,
            Self::Loader => 5,
            Self::Port => 6,
            Self::Other(_) => 99,
        }
    }

    /// Lowercase name as written in manifests
    pub fn as_str(&self) -> &str {
        match self {
            Self::Core => "core",
            Self::Tool => "tool",
            Self::Lib => "lib",
            Self::Emulator => "emulator",
            Self::Loader => "loader",
            Self::Port => "port",
            Self::Other(name) => name,
        }
    }

    /// Whether the target is a port
    pub fn is_port(&self) -> bool {
        matches!(self, Self::Port)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TargetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Build metadata only ports carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortDetails {
    /// `PORTVERSION`, `unknown` when absent
    pub version: String,
    /// `GIT_REPOSITORY`
    pub repository: String,
    /// `GIT_BRANCH`
    pub branch: String,
}

impl Default for PortDetails {
    fn default() -> Self {
        Self {
            version: DEFAULT_PORT_VERSION.to_string(),
            repository: String::new(),
            branch: String::new(),
        }
    }
}

/// A parsed description of one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description, never contains `|`
    pub description: String,
    /// Comma-separated free-form tags
    pub tags: String,
    /// Declared type
    #[serde(rename = "type")]
    pub target_type: TargetType,
    /// File the record was parsed from
    pub source: PathBuf,
    /// Port build metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<PortDetails>,
}

impl ManifestRecord {
    /// Serialize as `id|name|description|tags|type|source`
    pub fn to_pipe_string(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.description,
            self.tags,
            self.target_type,
            self.source.display()
        )
    }

    /// Parse a line produced by [`Self::to_pipe_string`]
    ///
    /// Port details are not part of the line format and come back as `None`.
    pub fn from_pipe_string(line: &str) -> Option<Self> {
        let mut fields = line.splitn(6, PIPE);
        let id = fields.next()?.to_string();
        let name = fields.next()?.to_string();
        let description = fields.next()?.to_string();
        let tags = fields.next()?.to_string();
        let target_type = TargetType::parse(fields.next()?);
        let source = PathBuf::from(fields.next()?);

        if id.is_empty() {
            return None;
        }

        Some(Self {
            id,
            name,
            description,
            tags,
            target_type,
            source,
            port: None,
        })
    }
}

/// Replace the record delimiter so free text never splits a line
pub fn sanitize_field(value: &str) -> String {
    value.replace(PIPE, " ")
}

/// First `KEY="value"` assignment in a registry script, empty when missing
fn quoted_assignment(content: &str, key: &str) -> String {
    let pattern = format!(r#"(?m)^[ \t]*{key}="([^"]+)""#);
    Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First `KEY = value` assignment in a build description, trimmed
fn make_assignment(content: &str, key: &str) -> Option<String> {
    let pattern = format!(r"(?m)^{key}[ \t]*=[ \t]*(.*)$");
    Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Parse registry script content into a record
pub fn parse_registry_content(content: &str, source: &Path) -> Option<ManifestRecord> {
    let id = quoted_assignment(content, "ID");
    if id.is_empty() {
        return None;
    }

    Some(ManifestRecord {
        id,
        name: sanitize_field(&quoted_assignment(content, "NAME")),
        description: sanitize_field(&quoted_assignment(content, "DESC")),
        tags: sanitize_field(&quoted_assignment(content, "TAGS")),
        target_type: TargetType::parse(&quoted_assignment(content, "TYPE")),
        source: source.to_path_buf(),
        port: None,
    })
}

/// Parse a registry script (`*.sh`)
pub fn parse_registry_record(path: &Path) -> Option<ManifestRecord> {
    let content = read_optional(path)?;
    parse_registry_content(&content, path)
}

/// Parse build-description content for the port named `lib_name`
pub fn parse_port_content(content: &str, lib_name: &str, source: &Path) -> ManifestRecord {
    let description = make_assignment(content, "SHORT_DESC")
        .map_or_else(|| DEFAULT_PORT_DESCRIPTION.to_string(), |d| sanitize_field(&d));
    let version = make_assignment(content, "PORTVERSION")
        .unwrap_or_else(|| DEFAULT_PORT_VERSION.to_string());

    ManifestRecord {
        id: lib_name.to_string(),
        name: lib_name.to_string(),
        description,
        tags: PORT_TAGS.to_string(),
        target_type: TargetType::Port,
        source: source.to_path_buf(),
        port: Some(PortDetails {
            version,
            repository: make_assignment(content, "GIT_REPOSITORY").unwrap_or_default(),
            branch: make_assignment(content, "GIT_BRANCH").unwrap_or_default(),
        }),
    }
}

/// Parse a port's `Makefile`; the port is named after its directory
pub fn parse_port_record(makefile: &Path) -> Option<ManifestRecord> {
    let lib_name = makefile.parent()?.file_name()?.to_string_lossy().into_owned();
    let content = read_optional(makefile)?;
    Some(parse_port_content(&content, &lib_name, makefile))
}

/// Declared dependencies from build-description content
///
/// Order is kept as written and duplicates are not removed.
pub fn parse_dependencies(content: &str) -> Vec<String> {
    make_assignment(content, "DEPENDENCIES")
        .map(|value| {
            value
                .split('#')
                .next()
                .unwrap_or_default()
                .split_whitespace()
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Declared dependencies of the `Makefile` at `makefile`, empty if unreadable
pub fn read_dependencies(makefile: &Path) -> Vec<String> {
    read_optional(makefile)
        .map(|content| parse_dependencies(&content))
        .unwrap_or_default()
}
