//! Error types for the KOSAIO engine
//!
//! Domain-specific error types using thiserror. Filesystem absence is never
//! an error anywhere in the engine; these types only cover the handful of
//! conditions a caller has to react to.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for not-found or empty input
pub const EXIT_NOT_FOUND: i32 = 1;

/// Exit code when the action needs a component that is missing on disk
pub const EXIT_DEPENDENCY_MISSING: i32 = 3;

/// Target validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Target identifier was empty or blank
    #[error("Target cannot be empty")]
    Empty,

    /// Target matched nothing in registry, diagnostics or ports
    #[error("Target '{target}' not found in registry or ports")]
    NotFound { target: String },

    /// Port action requested while the ports container is absent
    #[error("Port '{target}' requires {dependency}. Run: kosaio clone {dependency}")]
    DependencyMissing { target: String, dependency: String },
}

impl TargetError {
    /// Process exit code shell callers expect for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Empty | Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::DependencyMissing { .. } => EXIT_DEPENDENCY_MISSING,
        }
    }
}

/// Dependency resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// Circular dependency detected
    #[error("Circular dependency detected: {}", cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level engine error type
#[derive(Error, Debug)]
pub enum KosaioError {
    /// Target error
    #[error(transparent)]
    Target(#[from] TargetError),

    /// Resolver error
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

impl KosaioError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Target(e) => e.exit_code(),
            Self::Resolver(_) | Self::Filesystem(_) => EXIT_NOT_FOUND,
        }
    }
}
