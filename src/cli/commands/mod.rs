//! CLI command implementations
//!
//! Each command group is implemented in its own submodule. Command names are
//! kebab-case; the snake_case spellings are kept as aliases for shell
//! callers.

pub mod ports;
pub mod search;
pub mod target;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::config::EngineConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search tools and ports, with installation status
    Search {
        /// Search query (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Only show targets installed in either environment
        #[arg(short, long)]
        installed: bool,
    },

    /// Print every known target as a pipe-delimited record
    #[command(alias = "update_cache")]
    UpdateCache,

    /// List ports in the active ports container with their status
    #[command(alias = "list_ports")]
    ListPorts,

    /// Print the kind of a target (tool, port or core)
    #[command(alias = "get_type")]
    GetType {
        /// Target identifier
        query: String,
    },

    /// Validate a target and print its kind
    #[command(alias = "validate_target")]
    ValidateTarget {
        /// Target identifier
        target: String,

        /// Action about to be performed on the target
        #[arg(short, long)]
        action: Option<String>,
    },

    /// Print the directory a tool lives in
    #[command(alias = "get_tool_path")]
    GetToolPath {
        /// Tool identifier (e.g. kos, kos-ports, dcload-ip)
        tool: String,

        /// Force host (`dev`) or system (`sys`) mode
        #[arg(short, long, value_parser = ["dev", "sys"])]
        mode: Option<String>,
    },

    /// Print the path of a target's manifest script
    #[command(alias = "get_manifest_path")]
    GetManifestPath {
        /// Target identifier
        target: String,
    },

    /// Print the install order for one or more ports
    #[command(alias = "resolve_deps")]
    ResolveDeps {
        /// Ports to install
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Print build metadata of a port
    #[command(alias = "port_info")]
    PortInfo {
        /// Port name, spelled as on disk
        query: String,
    },

    /// Print the on-disk spelling of a port name
    #[command(alias = "resolve_port_name")]
    ResolvePortName {
        /// Port name in any case
        name: String,
    },

    /// Print the ids of every installed target
    #[command(alias = "get_installed_ids")]
    GetInstalledIds,

    /// Print the installation status of a target
    Status {
        /// Target identifier
        target: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, config: &EngineConfig, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Search { query, installed } => search::execute(config, output, &query, installed),
            Self::UpdateCache => search::update_cache(config),
            Self::ListPorts => search::list_ports(config, output),
            Self::GetInstalledIds => search::installed_ids(config),
            Self::GetType { query } => target::get_type(config, &query),
            Self::ValidateTarget { target, action } => {
                target::validate(config, &target, action.as_deref())
            }
            Self::GetToolPath { tool, mode } => target::tool_path(config, &tool, mode.as_deref()),
            Self::GetManifestPath { target } => target::manifest_path(config, &target),
            Self::Status { target } => target::status(config, output, &target),
            Self::ResolveDeps { targets } => ports::resolve_deps(config, &targets),
            Self::PortInfo { query } => ports::port_info(config, &query),
            Self::ResolvePortName { name } => ports::resolve_name(config, &name),
        }
    }
}
