//! CLI command handling
//!
//! Resolves configuration and dispatches commands to the scenario runner.

use std::path::Path;

use crate::commands::{Commands, GlobalArgs};
use crate::common::{paths, Config, Result};
use crate::testing::{self, builtin, RunOptions, TestResult};

/// Dispatch a CLI command
///
/// Returns whether the command succeeded; a scenario with failed steps is
/// `Ok(false)`, setup problems are `Err`.
pub async fn dispatch(command: Commands, global: GlobalArgs) -> Result<bool> {
    match command {
        Commands::Run { json } => {
            let config = resolve_config(&global)?;
            let scenario = builtin::foody_crud()?;
            let result =
                testing::execute_scenario(&scenario, &config, run_options(&global, json)).await?;
            report(&result, json)
        }

        Commands::Test { path, json } => {
            let config = resolve_config(&global)?;
            let result =
                testing::run_scenario(&path, &config, run_options(&global, json)).await?;
            report(&result, json)
        }

        Commands::Scenario => {
            print!("{}", builtin::FOODY_CRUD_YAML);
            Ok(true)
        }

        Commands::Config => {
            let config = resolve_config(&global)?;
            let path = global.config.clone().or_else(paths::config_path);
            println!("Config file: {}", describe_config_file(path.as_deref()));
            println!("Base URL:    {}", config.api.base_url);
            println!(
                "Token:       {}",
                if config.require_token().is_ok() {
                    "<set>"
                } else {
                    "<missing>"
                }
            );
            match config.timeouts.request_secs {
                Some(secs) => println!("Timeout:     {}s", secs),
                None => println!("Timeout:     <transport default>"),
            }
            Ok(true)
        }
    }
}

/// Layer configuration: file, then environment, then flags
pub fn resolve_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config
        .apply_env()
        .with_overrides(global.base_url.clone(), global.token.clone()))
}

/// Config file location for display, flagging one that does not exist
fn describe_config_file(path: Option<&Path>) -> String {
    match path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "<none>".to_string(),
    }
}

fn run_options(global: &GlobalArgs, json: bool) -> RunOptions {
    RunOptions {
        verbose: global.verbose,
        quiet: json,
    }
}

fn report(result: &TestResult, json: bool) -> Result<bool> {
    if json {
        let out = serde_json::to_string_pretty(result)?;
        println!("{}", out);
    }
    Ok(result.passed())
}
