use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// What the manifest does with a scanned file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFileKind {
    Source,
    Stylesheet,
    Config,
}

/// Scanner for the files of a React project
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan for sources, stylesheets and config files (.gitignore aware),
    /// sorted by path
    pub fn scan(&self) -> Vec<(PathBuf, ProjectFileKind)> {
        let mut files = Vec::new();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false);
        builder.filter_entry(move |entry| !FileScanner::is_ignored_scope(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if let Ok(meta) = entry.metadata() {
                        if meta.len() > MAX_FILE_SIZE_BYTES {
                            log::debug!(
                                "Skipping large file {} ({} bytes > {})",
                                path.display(),
                                meta.len(),
                                MAX_FILE_SIZE_BYTES
                            );
                            continue;
                        }
                    }

                    if let Some(kind) = Self::kind_of(path) {
                        files.push((path.to_path_buf(), kind));
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        log::info!("Found {} project files", files.len());
        files
    }

    pub fn kind_of(path: &Path) -> Option<ProjectFileKind> {
        let file_name = path.file_name().and_then(|name| name.to_str())?;

        if CONFIG_FILE_NAMES.contains(&file_name)
            || CONFIG_FILE_PREFIXES
                .iter()
                .any(|prefix| file_name.starts_with(prefix))
        {
            return Some(ProjectFileKind::Config);
        }

        let ext = path.extension().and_then(|ext| ext.to_str())?.to_lowercase();
        if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
            Some(ProjectFileKind::Source)
        } else if STYLE_EXTENSIONS.contains(&ext.as_str()) {
            Some(ProjectFileKind::Stylesheet)
        } else {
            None
        }
    }

    fn is_ignored_scope(path: &Path, root: &Path) -> bool {
        if let Ok(relative) = path.strip_prefix(root) {
            for component in relative.components() {
                if let std::path::Component::Normal(name) = component {
                    let lowered = name.to_string_lossy().to_lowercase();
                    if IGNORED_SCOPES.iter().any(|ignored| ignored == &lowered) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

const IGNORED_SCOPES: &[&str] = &[
    ".git",
    ".next",
    ".vite",
    ".turbo",
    ".cache",
    "node_modules",
    "build",
    "dist",
    "coverage",
];

const MAX_FILE_SIZE_BYTES: u64 = 1_048_576; // 1 MB

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];
const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];
const CONFIG_FILE_NAMES: &[&str] = &["package.json", "tsconfig.json"];
const CONFIG_FILE_PREFIXES: &[&str] = &["vite.config.", "tailwind.config."];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_project_files() {
        let kind = |p: &str| FileScanner::kind_of(Path::new(p));
        assert_eq!(kind("src/App.jsx"), Some(ProjectFileKind::Source));
        assert_eq!(kind("src/index.SCSS"), Some(ProjectFileKind::Stylesheet));
        assert_eq!(kind("package.json"), Some(ProjectFileKind::Config));
        assert_eq!(kind("tailwind.config.js"), Some(ProjectFileKind::Config));
        assert_eq!(kind("README.md"), None);
        assert_eq!(kind("src/data.json"), None);
    }

    #[test]
    fn skips_dependencies_and_build_output() {
        let temp = tempdir().unwrap();
        let deps = temp.path().join("node_modules").join("react");
        fs::create_dir_all(&deps).unwrap();
        fs::write(deps.join("index.js"), b"module.exports = {}").unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("bundle.js"), b"").unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src").join("App.jsx"), b"").unwrap();

        let files = FileScanner::new(temp.path()).scan();

        assert_eq!(files.len(), 1);
        assert!(files[0].0.ends_with("src/App.jsx"));
    }

    #[test]
    fn honors_gitignore() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("generated")).unwrap();
        fs::write(temp.path().join("generated").join("api.ts"), b"").unwrap();
        fs::write(temp.path().join("main.tsx"), b"").unwrap();
        fs::write(temp.path().join(".gitignore"), b"/generated").unwrap();

        let files = FileScanner::new(temp.path()).scan();

        assert!(files
            .iter()
            .all(|(p, _)| !p.to_string_lossy().contains("generated")));
        assert!(files.iter().any(|(p, _)| p.ends_with("main.tsx")));
    }
}
