//! Foody E2E CLI
//!
//! Runs the built-in Foody CRUD scenario, or any YAML scenario, against a
//! configured API endpoint and exits non-zero if any step fails.

use clap::Parser;
use foody::commands::{Commands, GlobalArgs};
use foody::{cli, common::logging};

#[derive(Parser)]
#[command(name = "foody", about = "End-to-end scenario runner for the Foody API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.global.verbose);

    match cli::dispatch(cli.command, cli.global).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
