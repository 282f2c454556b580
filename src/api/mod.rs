//! Foody REST API client and wire types

mod client;
mod types;

pub use client::FoodClient;
pub use types::{ApiReply, ApiResponse, CreateRequest, EditOperation, PatchOp};
