//! KOSAIO engine - path resolution and manifest discovery
//!
//! This library answers the questions the kosaio front-end scripts ask about
//! Dreamcast development targets: which environment (host workspace or
//! system SDK) a tool is active in, where it lives on disk, what kind of
//! target a name refers to, whether it is installed and in which order a set
//! of ports must be built.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Engine logic (resolution, discovery, status, dependencies)
//! - [`infra`] - Filesystem helpers
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
