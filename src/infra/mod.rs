//! Infrastructure layer
//!
//! Filesystem access shared by the core modules. Reads are tolerant: a
//! missing or unreadable file is reported as absent, never as a failure.

pub mod filesystem;
