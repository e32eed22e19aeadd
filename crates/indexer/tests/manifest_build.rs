use locator_indexer::{IndexerError, ManifestBuilder};
use locator_protocol::FileType;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

fn vite_project() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let root = temp.path();
    write(root, "package.json", r#"{"name":"landing","dependencies":{"react":"^18"}}"#);
    write(root, "tailwind.config.js", "export default { content: [] }");
    write(root, "README.md", "# Landing");
    write(root, "src/index.css", "@tailwind base;");
    write(
        root,
        "src/main.jsx",
        "import App from './App'\nimport './index.css'\n",
    );
    write(
        root,
        "src/App.jsx",
        r#"import { Routes, Route } from 'react-router-dom'
import Header from './components/Header'
import Hero from './components/Hero'
import Videos from './pages/Videos'

export default function App() {
  return (
    <>
      <Header />
      <Routes>
        <Route path="/" element={<Hero />} />
        <Route path="/videos" element={<Videos />} />
      </Routes>
    </>
  )
}
"#,
    );
    write(
        root,
        "src/components/Header.jsx",
        "export default function Header() {\n  return <header>Acme</header>\n}\n",
    );
    write(
        root,
        "src/components/Hero.jsx",
        "const Hero = () => (\n  <button>Start Deploying</button>\n)\nexport default Hero\n",
    );
    write(
        root,
        "src/pages/Videos.jsx",
        "export default function Videos() { return <main /> }",
    );
    write(root, "src/hooks/useToggle.js", "export function useToggle() {}");
    write(root, "node_modules/react/index.js", "module.exports = {}");
    temp
}

#[test]
fn builds_manifest_from_vite_project() {
    let temp = vite_project();
    let (manifest, stats) = ManifestBuilder::new(temp.path())
        .build_with_stats()
        .expect("build manifest");

    let paths: Vec<&str> = manifest.paths().collect();
    assert_eq!(
        paths,
        vec![
            "package.json",
            "src/App.jsx",
            "src/components/Header.jsx",
            "src/components/Hero.jsx",
            "src/hooks/useToggle.js",
            "src/index.css",
            "src/main.jsx",
            "src/pages/Videos.jsx",
            "tailwind.config.js",
        ]
    );
    assert_eq!(manifest.entry_point, "src/App.jsx");
    assert_eq!(
        manifest.style_files.iter().collect::<Vec<_>>(),
        vec!["src/index.css"]
    );
    assert_eq!(stats.files, 9);
    assert_eq!(stats.routes, 2);
    assert!(stats.errors.is_empty());

    let header = manifest.file("src/components/Header.jsx").expect("header");
    assert_eq!(header.file_type, FileType::Layout);
    assert_eq!(header.component_name(), Some("Header"));
    assert!(header.last_modified > 0);

    assert_eq!(
        manifest.file("src/pages/Videos.jsx").map(|r| r.file_type),
        Some(FileType::Page)
    );
    assert_eq!(
        manifest.file("src/hooks/useToggle.js").map(|r| r.file_type),
        Some(FileType::Hook)
    );
    assert_eq!(
        manifest.file("src/components/Hero.jsx").and_then(|r| r.component_name()),
        Some("Hero")
    );
}

#[test]
fn component_tree_links_local_imports() {
    let temp = vite_project();
    let manifest = ManifestBuilder::new(temp.path()).build().expect("build");

    let app = manifest.component_tree.get("App").expect("App node");
    assert_eq!(app.imports, vec!["Header", "Hero", "Videos"]);
    assert!(app.imported_by.is_empty());

    let hero = manifest.component_tree.get("Hero").expect("Hero node");
    assert_eq!(hero.imported_by, vec!["App"]);

    let routes: Vec<(&str, &str)> = manifest
        .routes
        .iter()
        .map(|r| (r.path.as_str(), r.component.as_str()))
        .collect();
    assert_eq!(routes, vec![("/", "Hero"), ("/videos", "Videos")]);
}

#[test]
fn empty_project_defaults_entry_point() {
    let temp = TempDir::new().expect("tempdir");
    let manifest = ManifestBuilder::new(temp.path()).build().expect("build");
    assert!(manifest.files.is_empty());
    assert_eq!(manifest.entry_point, "src/App.jsx");
}

#[test]
fn missing_root_is_an_error() {
    let temp = TempDir::new().expect("tempdir");
    let result = ManifestBuilder::new(temp.path().join("nope")).build();
    assert!(matches!(result, Err(IndexerError::InvalidPath(_))));
}
