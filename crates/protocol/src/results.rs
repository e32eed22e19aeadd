use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse quality estimate attached to a text match.
///
/// Variant order gives `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub const fn rank(self) -> u8 {
        match self {
            ConfidenceTier::High => 3,
            ConfidenceTier::Medium => 2,
            ConfidenceTier::Low => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Page,
    Layout,
    Component,
    Hook,
    Utility,
}

impl ComponentType {
    pub const fn priority(self) -> u8 {
        match self {
            ComponentType::Page => 5,
            ComponentType::Layout => 4,
            ComponentType::Component => 3,
            ComponentType::Hook => 2,
            ComponentType::Utility => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentType::Page => "page",
            ComponentType::Layout => "layout",
            ComponentType::Component => "component",
            ComponentType::Hook => "hook",
            ComponentType::Utility => "utility",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Jsx,
    Style,
    State,
    Function,
    Import,
}

impl ElementType {
    pub const fn priority(self) -> i8 {
        match self {
            ElementType::Jsx => 4,
            ElementType::Style => 3,
            ElementType::State => 2,
            ElementType::Function => 1,
            ElementType::Import => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Jsx => "jsx",
            ElementType::Style => "style",
            ElementType::State => "state",
            ElementType::Function => "function",
            ElementType::Import => "import",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering priority of an optional element type; unknown ranks below imports
pub fn element_priority(element: Option<ElementType>) -> i8 {
    element.map_or(-1, ElementType::priority)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Exact,
    Fuzzy,
    Semantic,
}

impl SearchType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchType::Exact => "exact",
            SearchType::Fuzzy => "fuzzy",
            SearchType::Semantic => "semantic",
        }
    }
}

/// One matching line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub file_path: String,

    /// 1-indexed
    pub line_number: usize,

    /// Trimmed
    pub line_content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_term: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,

    #[serde(default)]
    pub context_before: Vec<String>,

    #[serde(default)]
    pub context_after: Vec<String>,

    pub confidence: ConfidenceTier,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
}

impl SearchResult {
    pub fn has_extension(&self, extensions: &[&str]) -> bool {
        extensions.iter().any(|ext| self.file_path.ends_with(ext))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchExecutionResult {
    pub success: bool,
    pub results: Vec<SearchResult>,
    pub files_searched: usize,

    /// Wall-clock milliseconds
    #[serde(rename = "executionTime")]
    pub execution_time_ms: u64,

    pub used_fallback: bool,
    pub search_type: SearchType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Final `{file, line}` pair chosen as the edit location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetSelection {
    pub file_path: String,
    pub line_number: usize,
    pub reason: String,
}
