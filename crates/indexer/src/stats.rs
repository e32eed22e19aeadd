use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one manifest build
#[derive(Debug, Clone, Default, Serialize)]
pub struct ManifestStats {
    /// Files recorded in the manifest
    pub files: usize,

    /// Recorded files per manifest file type
    pub file_types: BTreeMap<String, usize>,

    pub stylesheets: usize,

    /// Files that define a component
    pub components: usize,

    pub routes: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,

    /// Files that could not be read
    pub errors: Vec<String>,
}

impl ManifestStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file_type: &str) {
        self.files += 1;
        *self.file_types.entry(file_type.to_string()).or_insert(0) += 1;
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}
