//! Scenario session
//!
//! Owns the HTTP client and the id captured by the most recent capturing
//! create step. One session lives for exactly one scenario run.

use tracing::{debug, info};

use crate::api::FoodClient;
use crate::common::{Config, Error, Result};

#[derive(Debug)]
pub struct Session {
    client: FoodClient,
    last_created_id: Option<String>,
}

impl Session {
    /// Acquire the client for a run. Failure here is fatal to the run.
    pub fn open(config: &Config) -> Result<Self> {
        let client = FoodClient::from_config(config)?;
        info!(base_url = %client.base_url(), "Session opened");
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: FoodClient) -> Self {
        Self {
            client,
            last_created_id: None,
        }
    }

    pub fn client(&self) -> &FoodClient {
        &self.client
    }

    pub fn last_created_id(&self) -> Option<&str> {
        self.last_created_id.as_deref()
    }

    /// Record the id returned by a create step
    pub fn capture(&mut self, id: impl Into<String>) {
        let id = id.into();
        info!(entity_id = %id, "Captured created entity");
        self.last_created_id = Some(id);
    }

    /// Resolve a step's target: an explicit id, else the captured one
    pub fn resolve_target<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        match explicit {
            Some(id) => Ok(id),
            None => self.last_created_id().ok_or(Error::NoCapturedEntity),
        }
    }

    /// Release the client
    pub fn close(self) {
        debug!(
            captured = self.last_created_id.as_deref().unwrap_or("<none>"),
            "Session closed"
        );
    }
}
