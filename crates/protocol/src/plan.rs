use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Extensions searched when a plan does not name its own
pub const DEFAULT_FILE_TYPES: [&str; 4] = [".jsx", ".tsx", ".js", ".ts"];

fn default_file_types() -> Vec<String> {
    DEFAULT_FILE_TYPES.iter().map(|ext| ext.to_string()).collect()
}

/// Secondary terms tried when the primary search finds nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FallbackSearch {
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Where to look for an edit target.
///
/// Produced either heuristically from a classified intent or by an external
/// LLM call; the search engine treats both the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlan {
    #[serde(default)]
    pub search_terms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regex_patterns: Vec<String>,

    #[serde(default = "default_file_types")]
    pub file_types_to_search: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority_files: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_files: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_search: Option<FallbackSearch>,
}

impl Default for SearchPlan {
    fn default() -> Self {
        Self {
            search_terms: Vec::new(),
            regex_patterns: Vec::new(),
            file_types_to_search: default_file_types(),
            priority_files: Vec::new(),
            exclude_files: Vec::new(),
            fallback_search: None,
        }
    }
}

impl SearchPlan {
    pub fn for_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_terms: terms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regex_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn priority_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_files = files.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn exclude_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files = files.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn file_types<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_types_to_search = extensions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn fallback(mut self, fallback: FallbackSearch) -> Self {
        self.fallback_search = Some(fallback);
        self
    }

    /// True when the plan has nothing to match with
    pub fn is_empty(&self) -> bool {
        self.search_terms.iter().all(|t| t.trim().is_empty())
            && self.regex_patterns.iter().all(|p| p.trim().is_empty())
    }
}
