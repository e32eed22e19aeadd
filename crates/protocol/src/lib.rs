//! # Locator Protocol
//!
//! Shared data model for the edit-intent pipeline: the project manifest the
//! surrounding application hands in, the classified intent, the search plan,
//! and the line-level search results.
//!
//! Every type serializes with camelCase field names so manifests and plans
//! produced outside this workspace (for example by an LLM call) can be fed in
//! as JSON unchanged.

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod intent;
mod manifest;
pub mod path_filters;
mod plan;
mod results;
pub mod schema;

pub use intent::{EditIntent, EditType, UnknownEditType};
pub use manifest::{ComponentInfo, ComponentNode, FileRecord, FileType, ProjectManifest, RouteEntry};
pub use plan::{FallbackSearch, SearchPlan, DEFAULT_FILE_TYPES};
pub use results::{
    element_priority, ComponentType, ConfidenceTier, ElementType, SearchExecutionResult,
    SearchResult, SearchType, TargetSelection,
};

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

pub fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}
