//! Core engine logic
//!
//! Every query here is a pure function of the configuration and the
//! filesystem state; filesystem helpers live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`environment`] - Host/system mode selection and path resolution
//! - [`manifest`] - Registry script and port `Makefile` parsing
//! - [`ports`] - Ports container enumeration and name resolution
//! - [`resolver`] - Dependency resolution
//! - [`search`] - Target classification and search
//! - [`status`] - Installation status per environment
//! - [`validate`] - Target validation and tool path lookup

pub mod environment;
pub mod manifest;
pub mod ports;
pub mod resolver;
pub mod search;
pub mod status;
pub mod validate;
