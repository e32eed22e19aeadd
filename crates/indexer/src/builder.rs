use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Instant, UNIX_EPOCH};

use crate::error::{IndexerError, Result};
use crate::parser::{classify_file_type, extract_component_info, extract_imports, extract_routes};
use crate::scanner::{FileScanner, ProjectFileKind};
use crate::stats::ManifestStats;
use locator_protocol::path_filters::normalize_path;
use locator_protocol::{ComponentNode, FileRecord, FileType, ProjectManifest};

/// Checked in order; the first one present becomes the entry point
const ENTRY_CANDIDATES: &[&str] = &[
    "src/App.jsx",
    "src/App.tsx",
    "src/App.js",
    "src/main.jsx",
    "src/main.tsx",
    "src/index.jsx",
    "src/index.tsx",
    "app/page.tsx",
    "app/page.jsx",
];

const DEFAULT_ENTRY_POINT: &str = "src/App.jsx";

const RESOLVE_SUFFIXES: &[&str] = &[
    "",
    ".jsx",
    ".tsx",
    ".js",
    ".ts",
    "/index.jsx",
    "/index.tsx",
    "/index.js",
    "/index.ts",
];

/// Builds a [`ProjectManifest`] from a project directory on disk
pub struct ManifestBuilder {
    root: PathBuf,
}

impl ManifestBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn build(&self) -> Result<ProjectManifest> {
        self.build_with_stats().map(|(manifest, _)| manifest)
    }

    pub fn build_with_stats(&self) -> Result<(ProjectManifest, ManifestStats)> {
        let started = Instant::now();
        if !self.root.is_dir() {
            return Err(IndexerError::InvalidPath(self.root.display().to_string()));
        }
        let root = self.root.canonicalize()?;

        let mut stats = ManifestStats::new();
        let mut manifest = ProjectManifest::default();
        let mut source_paths = Vec::new();

        for (path, kind) in FileScanner::new(&root).scan() {
            let Some(relative) = relative_path(&root, &path) else {
                continue;
            };
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("Skipping unreadable file {}: {err}", path.display());
                    stats.add_error(format!("{relative}: {err}"));
                    continue;
                }
            };

            let record = match kind {
                ProjectFileKind::Source => {
                    source_paths.push(relative.clone());
                    source_record(&relative, content)
                }
                ProjectFileKind::Stylesheet => {
                    manifest.style_files.insert(relative.clone());
                    FileRecord::new(content, FileType::Utility)
                }
                ProjectFileKind::Config => FileRecord::new(content, FileType::Utility),
            }
            .last_modified(modified_millis(&path));

            stats.add_file(record.file_type.as_str());
            if record.component_info.is_some() {
                stats.components += 1;
            }
            manifest.insert_file(&relative, record);
        }

        manifest.entry_point = pick_entry_point(&manifest, &source_paths);
        manifest.component_tree = component_tree(&manifest);
        manifest.routes = source_paths
            .iter()
            .filter_map(|path| manifest.file(path))
            .flat_map(|record| extract_routes(&record.content))
            .collect();

        stats.stylesheets = manifest.style_files.len();
        stats.routes = manifest.routes.len();
        stats.time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::info!(
            "Built manifest for {}: {} files, {} components, entry point {}",
            root.display(),
            stats.files,
            stats.components,
            manifest.entry_point
        );
        Ok((manifest, stats))
    }
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(normalize_path(&relative.to_string_lossy()))
}

fn modified_millis(path: &Path) -> u64 {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

fn source_record(relative: &str, content: String) -> FileRecord {
    let imports = extract_imports(&content);
    let component = extract_component_info(&content);
    let mut record = FileRecord::new(content, classify_file_type(relative)).imports(imports);
    if let Some(info) = component {
        record = record.component(info.name, info.child_components);
    }
    record
}

fn pick_entry_point(manifest: &ProjectManifest, source_paths: &[String]) -> String {
    ENTRY_CANDIDATES
        .iter()
        .find(|candidate| manifest.files.contains_key(**candidate))
        .map(|candidate| candidate.to_string())
        .or_else(|| source_paths.first().cloned())
        .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string())
}

/// Resolve a relative import against the importing file's directory
fn resolve_import(manifest: &ProjectManifest, importer: &str, source: &str) -> Option<String> {
    if !source.starts_with('.') {
        return None;
    }
    let mut segments: Vec<&str> = importer.split('/').collect();
    segments.pop();
    for part in source.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let base = segments.join("/");
    RESOLVE_SUFFIXES
        .iter()
        .map(|suffix| format!("{base}{suffix}"))
        .find(|candidate| manifest.files.contains_key(candidate))
}

/// Component import edges between local files, plus the reverse edges
fn component_tree(manifest: &ProjectManifest) -> BTreeMap<String, ComponentNode> {
    let mut tree: BTreeMap<String, ComponentNode> = BTreeMap::new();

    for (path, record) in &manifest.files {
        let Some(name) = record.component_name() else {
            continue;
        };
        tree.entry(name.to_string()).or_default();

        for source in record.imports.iter().flatten() {
            let Some(target) = resolve_import(manifest, path, source) else {
                continue;
            };
            let Some(child) = manifest.file(&target).and_then(FileRecord::component_name) else {
                continue;
            };
            if child == name {
                continue;
            }

            let node = tree.entry(name.to_string()).or_default();
            if !node.imports.iter().any(|c| c == child) {
                node.imports.push(child.to_string());
            }
            let child_node = tree.entry(child.to_string()).or_default();
            if !child_node.imported_by.iter().any(|p| p == name) {
                child_node.imported_by.push(name.to_string());
            }
        }
    }
    tree
}
