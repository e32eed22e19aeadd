use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of edit categories; exactly one per classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditType {
    UpdateComponent,
    AddFeature,
    FixIssue,
    UpdateStyle,
    Refactor,
    FullRebuild,
    AddDependency,
}

impl EditType {
    pub const ALL: [EditType; 7] = [
        EditType::UpdateComponent,
        EditType::AddFeature,
        EditType::FixIssue,
        EditType::UpdateStyle,
        EditType::Refactor,
        EditType::FullRebuild,
        EditType::AddDependency,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EditType::UpdateComponent => "UPDATE_COMPONENT",
            EditType::AddFeature => "ADD_FEATURE",
            EditType::FixIssue => "FIX_ISSUE",
            EditType::UpdateStyle => "UPDATE_STYLE",
            EditType::Refactor => "REFACTOR",
            EditType::FullRebuild => "FULL_REBUILD",
            EditType::AddDependency => "ADD_DEPENDENCY",
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown edit type: {0}")]
pub struct UnknownEditType(pub String);

impl FromStr for EditType {
    type Err = UnknownEditType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw
            .trim()
            .to_ascii_uppercase()
            .replace(|c: char| c == '-' || c == ' ', "_");
        EditType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownEditType(raw.to_string()))
    }
}

/// Output of the intent classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditIntent {
    #[serde(rename = "type")]
    pub edit_type: EditType,

    /// Never empty; falls back to the manifest entry point
    pub target_files: Vec<String>,

    /// Heuristic score in [0, 1], not a probability
    pub confidence: f64,

    pub description: String,

    #[serde(default)]
    pub suggested_context: Vec<String>,
}
