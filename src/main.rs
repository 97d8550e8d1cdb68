//! KOSAIO engine CLI
//!
//! Entry point for the kosaio-engine command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kosaio_engine::cli::output::{display_error, exit_code_for};
use kosaio_engine::cli::Cli;
use kosaio_engine::config::EngineConfig;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "KOSAIO_LOG";

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cli.output_config().log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_env();

    if let Err(e) = cli.run(&config) {
        display_error(&e);
        std::process::exit(exit_code_for(&e));
    }
}
