//! Foody E2E - scenario runner for the Foody food-review REST API
//!
//! This library drives ordered create/edit/list/delete steps against the
//! API, carrying the id of the last created food between steps and checking
//! every reply's status and payload.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use api::{ApiReply, ApiResponse, CreateRequest, EditOperation, FoodClient};
pub use common::{Config, Error, Result};
pub use testing::{Session, TestResult, TestScenario};
