//! The canonical Foody CRUD scenario, embedded in the binary

use crate::common::Result;

use super::config::TestScenario;

/// Message returned by a successful edit
pub const EDIT_SUCCESS: &str = "Successfully edited";
/// Message returned by a successful delete
pub const DELETE_SUCCESS: &str = "Deleted successfully!";
/// Message returned when editing an unknown id
pub const EDIT_NOT_FOUND: &str = "No food revues...";
/// Message returned when deleting an unknown id
pub const DELETE_FAILED: &str = "Unable to delete this food revue!";
/// Fabricated id used by the negative-path steps
pub const FAKE_FOOD_ID: &str = "12345";

/// Source of the canonical scenario
pub const FOODY_CRUD_YAML: &str = include_str!("../../scenarios/foody_crud.yaml");

/// Parse the embedded scenario
pub fn foody_crud() -> Result<TestScenario> {
    TestScenario::from_yaml(FOODY_CRUD_YAML)
}
