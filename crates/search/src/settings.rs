use std::path::Path;

use crate::error::{Result, SearchError};
use locator_protocol::DEFAULT_FILE_TYPES;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// When the synonym tier of the fallback ladder may run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticExpansion {
    /// Only for plans that carry a `fallbackSearch`
    #[default]
    WithFallback,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSettings {
    /// Lines captured on each side of a match
    pub context_lines: usize,
    /// Used when a plan's `fileTypesToSearch` is empty
    pub default_file_types: Vec<String>,
    pub semantic_expansion: SemanticExpansion,
    /// Cap on returned results after ordering; `None` keeps everything
    pub max_results: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            default_file_types: DEFAULT_FILE_TYPES.iter().map(|e| e.to_string()).collect(),
            semantic_expansion: SemanticExpansion::default(),
            max_results: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(default)]
    context_lines: Option<usize>,
    #[serde(default)]
    default_file_types: Option<Vec<String>>,
    #[serde(default)]
    semantic_expansion: Option<SemanticExpansion>,
    #[serde(default)]
    max_results: Option<usize>,
}

impl SearchSettings {
    /// Load settings from a `.toml` or `.json` file; other extensions are
    /// tried as JSON first, then TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| SearchError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => parse_toml(&bytes)?,
            Some("json") => parse_json(&bytes)?,
            _ => parse_raw(&bytes)?,
        };
        let settings = Self::from_raw(raw)?;
        log::debug!("Loaded search settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_raw(parse_raw(bytes)?)
    }

    fn from_raw(raw: RawSettings) -> Result<Self> {
        if let Some(version) = raw.schema_version {
            if version != 1 {
                return Err(SearchError::InvalidSettings(format!(
                    "schema_version {version} is not supported (expected 1)"
                )));
            }
        }

        let defaults = Self::default();
        let settings = Self {
            context_lines: raw.context_lines.unwrap_or(defaults.context_lines),
            default_file_types: raw
                .default_file_types
                .map(|types| {
                    types
                        .into_iter()
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.default_file_types),
            semantic_expansion: raw.semantic_expansion.unwrap_or(defaults.semantic_expansion),
            max_results: raw.max_results,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_lines == 0 {
            return Err(SearchError::InvalidSettings(
                "context_lines must be at least 1".to_string(),
            ));
        }
        if self.default_file_types.is_empty() {
            return Err(SearchError::InvalidSettings(
                "default_file_types must name at least one extension".to_string(),
            ));
        }
        if self.max_results == Some(0) {
            return Err(SearchError::InvalidSettings(
                "max_results must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_json(bytes: &[u8]) -> Result<RawSettings> {
    serde_json::from_slice(bytes).map_err(|err| SearchError::SettingsParse(err.to_string()))
}

fn parse_toml(bytes: &[u8]) -> Result<RawSettings> {
    let text = std::str::from_utf8(bytes).map_err(|err| SearchError::SettingsParse(err.to_string()))?;
    toml::from_str(text).map_err(|err| SearchError::SettingsParse(err.to_string()))
}

fn parse_raw(bytes: &[u8]) -> Result<RawSettings> {
    match serde_json::from_slice(bytes) {
        Ok(raw) => Ok(raw),
        Err(json_err) => parse_toml(bytes).map_err(|toml_err| {
            SearchError::SettingsParse(format!("{json_err}; TOML parse error: {toml_err}"))
        }),
    }
}
