use crate::path_filters::normalize_path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Architectural role of a file inside the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Page,
    Layout,
    Component,
    Hook,
    Utility,
}

impl FileType {
    pub const fn as_str(self) -> &'static str {
        match self {
            FileType::Page => "page",
            FileType::Layout => "layout",
            FileType::Component => "component",
            FileType::Hook => "hook",
            FileType::Utility => "utility",
        }
    }
}

/// Parsed metadata for files that define a React component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub name: String,
    #[serde(default)]
    pub child_components: Vec<String>,
}

/// Snapshot of a single project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub content: String,

    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub last_modified: u64,

    #[serde(rename = "type")]
    pub file_type: FileType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_info: Option<ComponentInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<String>>,
}

impl FileRecord {
    pub fn new(content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            content: content.into(),
            last_modified: 0,
            file_type,
            component_info: None,
            imports: None,
        }
    }

    #[must_use]
    pub fn last_modified(mut self, millis: u64) -> Self {
        self.last_modified = millis;
        self
    }

    #[must_use]
    pub fn component(mut self, name: impl Into<String>, children: Vec<String>) -> Self {
        self.component_info = Some(ComponentInfo {
            name: name.into(),
            child_components: children,
        });
        self
    }

    #[must_use]
    pub fn imports(mut self, imports: Vec<String>) -> Self {
        self.imports = Some(imports);
        self
    }

    pub fn component_name(&self) -> Option<&str> {
        self.component_info.as_ref().map(|info| info.name.as_str())
    }
}

/// Import relationships of one component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub imported_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteEntry {
    pub path: String,
    pub component: String,
}

/// Ground truth of the current project state.
///
/// Files are kept in a sorted map, so every "first matching file" rule in the
/// resolvers walks paths in lexicographic order and repeated calls agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub entry_point: String,

    #[serde(default)]
    pub files: BTreeMap<String, FileRecord>,

    #[serde(default)]
    pub style_files: BTreeSet<String>,

    #[serde(default)]
    pub component_tree: BTreeMap<String, ComponentNode>,

    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl ProjectManifest {
    pub fn new(entry_point: impl AsRef<str>) -> Self {
        Self {
            entry_point: normalize_path(entry_point.as_ref()),
            ..Default::default()
        }
    }

    /// Insert a file under its normalized path, replacing any previous record
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<str>, record: FileRecord) -> Self {
        self.insert_file(path, record);
        self
    }

    pub fn insert_file(&mut self, path: impl AsRef<str>, record: FileRecord) {
        self.files.insert(normalize_path(path.as_ref()), record);
    }

    #[must_use]
    pub fn with_style_file(mut self, path: impl AsRef<str>) -> Self {
        self.style_files.insert(normalize_path(path.as_ref()));
        self
    }

    pub fn file(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Path -> content view consumed by the content search engine
    pub fn contents(&self) -> BTreeMap<String, String> {
        self.files
            .iter()
            .map(|(path, record)| (path.clone(), record.content.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_deserializes_from_camel_case_json() {
        let raw = r#"{
            "entryPoint": "src/App.jsx",
            "files": {
                "src/App.jsx": {
                    "content": "export default function App() {}",
                    "lastModified": 42,
                    "type": "component",
                    "componentInfo": { "name": "App", "childComponents": ["Hero"] }
                }
            },
            "styleFiles": ["src/index.css"],
            "routes": [{ "path": "/", "component": "App" }]
        }"#;

        let manifest: ProjectManifest = serde_json::from_str(raw).expect("manifest");
        let app = manifest.file("src/App.jsx").expect("app record");
        assert_eq!(app.last_modified, 42);
        assert_eq!(app.file_type, FileType::Component);
        assert_eq!(app.component_name(), Some("App"));
        assert_eq!(app.imports, None);
        assert!(manifest.style_files.contains("src/index.css"));
        assert!(manifest.component_tree.is_empty());
    }

    #[test]
    fn insert_normalizes_paths() {
        let manifest = ProjectManifest::new("./src/App.jsx")
            .with_file(".\\src\\Hero.jsx", FileRecord::new("", FileType::Component));
        assert_eq!(manifest.entry_point, "src/App.jsx");
        assert_eq!(manifest.paths().collect::<Vec<_>>(), vec!["src/Hero.jsx"]);
    }
}
