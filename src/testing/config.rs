//! Test scenario configuration types
//!
//! Defines the data structures for deserializing YAML test scenarios.

use serde::{Deserialize, Deserializer};

use crate::api::{CreateRequest, EditOperation};
use crate::common::{Error, Result};

/// A complete test scenario loaded from a YAML file
#[derive(Deserialize, Debug, Clone)]
pub struct TestScenario {
    /// Name of the test scenario
    pub name: String,
    /// Optional description of what the test verifies
    pub description: Option<String>,
    /// The sequence of test steps to execute, in order
    pub steps: Vec<TestStep>,
}

impl TestScenario {
    /// Parse a scenario from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse test scenario: {}", e)))
    }
}

/// A single test step in the execution flow
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TestStep {
    /// `POST /api/Food/Create`
    Create {
        /// Label shown in the report
        name: Option<String>,
        /// Request body
        body: CreateRequest,
        /// Store the returned id as the session's last created entity
        #[serde(default)]
        capture: bool,
        expect: Expectation,
    },
    /// `PATCH /api/Food/Edit/{id}`
    Edit {
        name: Option<String>,
        /// Target id; the last captured entity when omitted
        #[serde(default, deserialize_with = "lenient_id")]
        id: Option<String>,
        /// Patch document
        ops: Vec<EditOperation>,
        expect: Expectation,
    },
    /// `GET /api/Food/All`
    List {
        name: Option<String>,
        expect: Expectation,
    },
    /// `DELETE /api/Food/Delete/{id}`
    Delete {
        name: Option<String>,
        /// Target id; the last captured entity when omitted
        #[serde(default, deserialize_with = "lenient_id")]
        id: Option<String>,
        expect: Expectation,
    },
}

/// Unquoted YAML ids like `id: 12345` arrive as integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    }))
}

impl TestStep {
    /// Human-readable label for reports
    pub fn label(&self) -> String {
        let (name, fallback) = match self {
            TestStep::Create { name, body, .. } => (name, format!("create '{}'", body.name)),
            TestStep::Edit { name, id, .. } => (name, format!("edit {}", target_label(id))),
            TestStep::List { name, .. } => (name, "list all".to_string()),
            TestStep::Delete { name, id, .. } => (name, format!("delete {}", target_label(id))),
        };
        name.clone().unwrap_or(fallback)
    }

    pub fn expectation(&self) -> &Expectation {
        match self {
            TestStep::Create { expect, .. }
            | TestStep::Edit { expect, .. }
            | TestStep::List { expect, .. }
            | TestStep::Delete { expect, .. } => expect,
        }
    }

    /// Whether the step reads the session's captured id
    pub fn uses_captured_id(&self) -> bool {
        matches!(
            self,
            TestStep::Edit { id: None, .. } | TestStep::Delete { id: None, .. }
        )
    }
}

fn target_label(id: &Option<String>) -> String {
    match id {
        Some(id) => format!("'{}'", id),
        None => "last created".to_string(),
    }
}

/// Expectations for a reply
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Expectation {
    /// Expected HTTP status code
    pub status: u16,
    /// Expected `msg` field (exact match)
    pub message: Option<String>,
    /// Require a non-empty `foodId` field
    #[serde(default)]
    pub entity_id: bool,
    /// Substring that should be in the raw body
    pub body_contains: Option<String>,
}

impl Expectation {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_entity_id(mut self) -> Self {
        self.entity_id = true;
        self
    }

    pub fn with_body_contains(mut self, needle: impl Into<String>) -> Self {
        self.body_contains = Some(needle.into());
        self
    }

    /// Whether checking this expectation needs the body decoded as JSON
    pub fn needs_payload(&self) -> bool {
        self.message.is_some() || self.entity_id
    }
}
