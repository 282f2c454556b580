//! Test runner implementation
//!
//! Executes scenario steps strictly in order against one session. A failed
//! step is recorded and the run moves on; only setup failures abort.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use crate::api::{ApiReply, ApiResponse};
use crate::common::{truncate, Config, Error, Result};

use super::config::{Expectation, TestScenario, TestStep};
use super::session::Session;

/// Outcome of a single step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// 1-based position in the scenario
    pub index: usize,
    pub label: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a test run
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub steps_total: usize,
    pub steps: Vec<StepOutcome>,
}

impl TestResult {
    /// True only if every step ran and passed
    pub fn passed(&self) -> bool {
        self.steps.len() == self.steps_total && self.steps.iter().all(|s| s.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.passed)
    }

    pub fn step(&self, index: usize) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| s.index == index)
    }
}

/// Output settings for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print request details and reply bodies
    pub verbose: bool,
    /// Suppress human-readable progress (e.g. for JSON output)
    pub quiet: bool,
}

/// Load a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<TestScenario> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read test scenario '{}': {}",
            path.display(),
            e
        ))
    })?;
    TestScenario::from_yaml(&content)
}

/// Run a test scenario from a YAML file
pub async fn run_scenario(path: &Path, config: &Config, options: RunOptions) -> Result<TestResult> {
    let scenario = load_scenario(path)?;
    execute_scenario(&scenario, config, options).await
}

/// Open a session, run every step, and release the session
pub async fn execute_scenario(
    scenario: &TestScenario,
    config: &Config,
    options: RunOptions,
) -> Result<TestResult> {
    let mut session = Session::open(config)?;
    let result = run_steps(scenario, &mut session, options).await;
    session.close();
    Ok(result)
}

/// Run every step of `scenario` against an existing session
pub async fn run_steps(
    scenario: &TestScenario,
    session: &mut Session,
    options: RunOptions,
) -> TestResult {
    let steps_total = scenario.steps.len();

    if !options.quiet {
        println!(
            "\n{} {}",
            "Running Test:".blue().bold(),
            scenario.name.white().bold()
        );
        if let Some(desc) = &scenario.description {
            println!("  {}", desc.dimmed());
        }
        println!("\n{}", "Steps:".cyan());
    }

    let mut steps = Vec::with_capacity(steps_total);

    for (i, step) in scenario.steps.iter().enumerate() {
        let step_num = i + 1;
        let label = step.label();

        let outcome = match execute_step(session, step).await {
            Ok(detail) => {
                if !options.quiet {
                    println!("  {} Step {}: {}", "✓".green(), step_num, label.dimmed());
                    if options.verbose {
                        println!("      {}", detail.dimmed());
                    }
                }
                StepOutcome {
                    index: step_num,
                    label,
                    passed: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!(step = step_num, error = %e, "Step failed");
                if !options.quiet {
                    println!("  {} Step {}: {}", "✗".red(), step_num, label);
                    println!("      {}", e.to_string().red());
                }
                StepOutcome {
                    index: step_num,
                    label,
                    passed: false,
                    error: Some(e.to_string()),
                }
            }
        };
        steps.push(outcome);
    }

    let result = TestResult {
        name: scenario.name.clone(),
        steps_total,
        steps,
    };

    if !options.quiet {
        if result.passed() {
            println!("\n{} {}\n", "✓".green().bold(), "Test Passed".green().bold());
        } else {
            println!(
                "\n{} {} ({} of {} steps failed)\n",
                "✗".red().bold(),
                "Test Failed".red().bold(),
                result.failures().count(),
                steps_total
            );
        }
    }

    result
}

/// Execute a single test step, returning a short description of the reply
pub async fn execute_step(session: &mut Session, step: &TestStep) -> Result<String> {
    match step {
        TestStep::Create {
            body,
            capture,
            expect,
            ..
        } => {
            let reply = session.client().create(body).await?;
            let payload = check_reply(expect, &reply)?;

            if *capture {
                let payload = match payload {
                    Some(p) => p,
                    None => reply.json()?,
                };
                match payload.entity_id.filter(|id| !id.is_empty()) {
                    Some(id) => session.capture(id),
                    None => {
                        return Err(Error::assertion(
                            "an entity id to capture",
                            "no foodId in response",
                        ))
                    }
                }
            }
            Ok(describe(&reply))
        }
        TestStep::Edit { id, ops, expect, .. } => {
            let target = session.resolve_target(id.as_deref())?.to_string();
            let reply = session.client().edit(&target, ops).await?;
            check_reply(expect, &reply)?;
            Ok(describe(&reply))
        }
        TestStep::List { expect, .. } => {
            let reply = session.client().list().await?;
            check_reply(expect, &reply)?;
            Ok(describe(&reply))
        }
        TestStep::Delete { id, expect, .. } => {
            let target = session.resolve_target(id.as_deref())?.to_string();
            let reply = session.client().delete(&target).await?;
            check_reply(expect, &reply)?;
            Ok(describe(&reply))
        }
    }
}

/// Check a reply against an expectation
///
/// Order: status, raw body substring, then decoded fields. The body is only
/// decoded when a field assertion needs it; the decoded payload is returned.
pub fn check_reply(expect: &Expectation, reply: &ApiReply) -> Result<Option<ApiResponse>> {
    let actual = reply.status.as_u16();
    if actual != expect.status {
        return Err(Error::assertion(
            format!("status {}", expect.status),
            format!("status {} (body: {})", actual, snippet(&reply.body)),
        ));
    }

    if let Some(needle) = &expect.body_contains {
        if !reply.body.contains(needle.as_str()) {
            return Err(Error::TestAssertion(format!(
                "Body does not contain '{}'. Got: '{}'",
                needle,
                snippet(&reply.body)
            )));
        }
    }

    if !expect.needs_payload() {
        return Ok(None);
    }

    let payload = reply.json()?;

    if let Some(expected) = &expect.message {
        let actual = payload.message.as_deref();
        if actual != Some(expected.as_str()) {
            return Err(Error::assertion(
                format!("message '{}'", expected),
                match actual {
                    Some(m) => format!("message '{}'", m),
                    None => "no message".to_string(),
                },
            ));
        }
    }

    if expect.entity_id && !payload.entity_id.as_deref().is_some_and(|id| !id.is_empty()) {
        return Err(Error::assertion("a non-empty foodId", "none"));
    }

    Ok(Some(payload))
}

fn describe(reply: &ApiReply) -> String {
    format!("HTTP {} {}", reply.status.as_u16(), snippet(&reply.body))
}

fn snippet(body: &str) -> String {
    truncate(body, 200)
}
