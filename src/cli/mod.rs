//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::config::EngineConfig;
use commands::Commands;
use output::OutputConfig;

/// KOSAIO engine - path resolution and manifest discovery
///
/// Answers the kosaio shell front-end's questions about targets: where they
/// live, what they are, whether they are installed and in which order ports
/// must be built.
#[derive(Parser, Debug)]
#[command(name = "kosaio-engine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors and requested data
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output preferences selected by the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    pub fn run(self, config: &EngineConfig) -> Result<()> {
        let output = self.output_config();
        self.command.run(config, &output)
    }
}
