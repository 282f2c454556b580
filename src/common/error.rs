//! Error types for the Foody scenario runner
//!
//! Step-level errors (assertions, transport, decoding) are recorded against
//! the step that produced them. Setup errors abort the whole run.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the scenario runner
#[derive(Error, Debug)]
pub enum Error {
    // === Assertion Errors ===
    #[error("Expected {expected}, got {actual}")]
    Assertion { expected: String, actual: String },

    #[error("Test assertion failed: {0}")]
    TestAssertion(String),

    #[error("No entity has been captured yet. Add a create step with 'capture: true' before this step")]
    NoCapturedEntity,

    // === Transport Errors ===
    #[error("HTTP request failed ({}): {}", transport_kind(.0), error_chain(.0))]
    Transport(#[from] reqwest::Error),

    // === Payload Errors ===
    #[error("Failed to decode response body (HTTP {status}): {error}. Body: {body}")]
    Decode {
        status: u16,
        error: String,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Setup Errors ===
    #[error("No API token configured. Set FOODY_TOKEN, pass --token, or add 'token' under [api] in the config file")]
    MissingCredential,

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create an assertion error from anything displayable
    pub fn assertion(expected: impl std::fmt::Display, actual: impl std::fmt::Display) -> Self {
        Self::Assertion {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Short label for what went wrong on the wire
fn transport_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_body() || err.is_decode() {
        "response body error"
    } else if err.is_builder() {
        "invalid request"
    } else {
        "transport error"
    }
}

/// `err` followed by every `source()` below it, joined with ": "
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
