//! Wire types for the Foody REST API
//!
//! Request bodies are what the runner sends; `ApiResponse` is the envelope the
//! service answers with for create, edit and delete.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::common::{truncate, Error, Result};

/// Body of `POST /api/Food/Create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub description: String,
    /// Picture URL; omitted from the body when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether the service should accept this request
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}

/// Patch operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    #[default]
    Replace,
    Add,
    Remove,
}

/// One entry of the patch document sent to `PATCH /api/Food/Edit/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOperation {
    /// JSON pointer to the field, e.g. `/name`
    pub path: String,
    #[serde(default)]
    pub op: PatchOp,
    pub value: String,
}

impl EditOperation {
    /// A `replace` of the field at `path`
    pub fn replace(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            op: PatchOp::Replace,
            value: value.into(),
        }
    }
}

/// Response envelope; error responses carry only a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "foodId", default)]
    pub entity_id: Option<String>,
    #[serde(rename = "msg", default)]
    pub message: Option<String>,
}

/// Raw reply: status plus the undecoded body
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    /// Decode the body as an [`ApiResponse`]
    pub fn json(&self) -> Result<ApiResponse> {
        serde_json::from_str(&self.body).map_err(|e| Error::Decode {
            status: self.status.as_u16(),
            error: e.to_string(),
            body: truncate(&self.body, 200),
        })
    }
}
