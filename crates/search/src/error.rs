use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures loading search settings. Searching itself never fails.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to read settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings are not valid JSON or TOML: {0}")]
    SettingsParse(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
