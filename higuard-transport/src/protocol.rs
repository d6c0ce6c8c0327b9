//! Wire types for the error-ingest endpoint.
//!
//! Field names are snake_case JSON, matching the dashboard's create-error
//! contract.

use higuard_core::Tag;
use serde::{Deserialize, Serialize};

/// Body of `POST /errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// Source path extracted from the topmost stack frame, or a sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Line number paired with `path`; 0 when no frame was found.
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_affected: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagPayload>,
}

impl Default for ErrorRequest {
    fn default() -> Self {
        Self {
            message: String::new(),
            stack_trace: None,
            path: None,
            line: 0,
            user_affected: None,
            tags: Vec::new(),
        }
    }
}

/// One tag on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPayload {
    pub key: String,
    pub value: String,
}

impl From<&Tag> for TagPayload {
    fn from(tag: &Tag) -> Self {
        Self {
            key: tag.key.clone(),
            value: tag.value.clone(),
        }
    }
}
