//! CLI command definitions
//!
//! Defines the clap commands for the foody CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Base URL of the Foody API (overrides FOODY_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides FOODY_TOKEN and the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in Foody CRUD scenario
    Run {
        /// Print the result as JSON instead of progress lines
        #[arg(long)]
        json: bool,
    },

    /// Execute a test scenario defined in a YAML file
    Test {
        /// Path to the YAML test scenario file
        path: PathBuf,

        /// Print the result as JSON instead of progress lines
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in scenario as YAML
    Scenario,

    /// Show the resolved configuration (token redacted)
    Config,
}
