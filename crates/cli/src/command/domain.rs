use anyhow::{anyhow, Result};
use locator_protocol::{
    EditIntent, ErrorEnvelope, ProjectManifest, SearchExecutionResult, SearchPlan, SearchResult,
    TargetSelection,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub action: CommandAction,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

fn empty_payload() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    Manifest,
    Classify,
    Search,
    Select,
    Locate,
}

impl CommandAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandAction::Manifest => "manifest",
            CommandAction::Classify => "classify",
            CommandAction::Search => "search",
            CommandAction::Select => "select",
            CommandAction::Locate => "locate",
        }
    }
}

/// A project given either as a directory to index or as an inline manifest
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSource {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub manifest: Option<ProjectManifest>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestPayload {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyPayload {
    pub prompt: String,
    #[serde(flatten)]
    pub project: ProjectSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub plan: SearchPlan,
    /// Inline path -> content map; used instead of `path`/`manifest` when set
    #[serde(default)]
    pub files: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub project: ProjectSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPayload {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    pub edit_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatePayload {
    pub prompt: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(flatten)]
    pub project: ProjectSource,
}

pub const fn default_max_results() -> usize {
    5
}

/// Everything the full pipeline decided for one prompt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateOutput {
    pub intent: EditIntent,
    pub plan: SearchPlan,
    pub search: SearchExecutionResult,
    pub target: Option<TargetSelection>,
    /// Markdown rendering of the top results for an editing prompt
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl CommandResponse {
    pub fn is_error(&self) -> bool {
        matches!(self.status, CommandStatus::Error)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<usize>,
}

#[derive(Debug)]
pub struct CommandOutcome {
    pub data: Value,
    pub meta: ResponseMeta,
}

impl CommandOutcome {
    pub fn from_value<T: Serialize>(value: T) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_value(value)?,
            meta: ResponseMeta::default(),
        })
    }

    #[must_use]
    pub fn with_files(mut self, files: usize) -> Self {
        self.meta.files = Some(files);
        self
    }
}

pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|err| anyhow!("Invalid payload: {err}"))
}

/// Map an error message to a stable error code and an optional hint
pub fn classify_error(message: &str, action: Option<CommandAction>) -> ErrorEnvelope {
    if message.contains("Invalid payload") {
        let hint = match action {
            Some(CommandAction::Classify | CommandAction::Locate) => {
                "Payload needs `prompt` plus `path` (project directory) or `manifest`."
            }
            Some(CommandAction::Search) => {
                "Payload needs `plan` plus `files`, `path` or `manifest`."
            }
            Some(CommandAction::Select) => "Payload needs `results` and `editType`.",
            Some(CommandAction::Manifest) | None => "Check the request JSON shape.",
        };
        ErrorEnvelope::new("invalid_request", message).with_hint(hint)
    } else if message.contains("Invalid project path") {
        ErrorEnvelope::new("invalid_path", message)
            .with_hint("Pass an existing project directory in payload.path.")
    } else if message.contains("No project given") {
        ErrorEnvelope::new("missing_project", message)
            .with_hint("Set payload.path to the project root or inline a manifest.")
    } else if message.contains("Invalid settings") || message.contains("settings file") {
        ErrorEnvelope::new("invalid_settings", message)
    } else {
        ErrorEnvelope::new("internal", message)
    }
}
