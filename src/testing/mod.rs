//! E2E Test Runner
//!
//! Reads YAML test scenarios and runs them step by step against the Foody
//! API, carrying the id of the last created entity between steps.

pub mod builtin;
mod config;
mod runner;
mod session;

pub use config::*;
pub use runner::{
    check_reply, execute_scenario, execute_step, load_scenario, run_scenario, run_steps,
    RunOptions, StepOutcome, TestResult,
};
pub use session::Session;
