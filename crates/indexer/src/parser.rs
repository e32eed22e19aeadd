//! Lightweight source analysis for manifest records.
//!
//! Regex based on purpose: the manifest only needs import sources, the
//! defined component and its JSX children, and `<Route>` declarations.

use locator_protocol::path_filters::basename;
use locator_protocol::{ComponentInfo, FileType, RouteEntry};
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:[\w*{}\s,$]+\s+from\s+)?['"]([^'"]+)['"]"#)
        .expect("valid import regex")
});

static REQUIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid require regex")
});

static COMPONENT_DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^\s*(?:export\s+)?(?:default\s+)?(?:function\s+([A-Z]\w*)|(?:const|let)\s+([A-Z]\w*)\s*(?::[^=]+)?=)",
    )
    .expect("valid component definition regex")
});

static JSX_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Z][\w]*)").expect("valid jsx tag regex"));

static ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<Route\b[^>]*>").expect("valid route regex"));

static ROUTE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bpath\s*=\s*(?:\{\s*)?['"]([^'"]*)['"]"#).expect("valid route path regex")
});

static ROUTE_TARGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:element\s*=\s*\{\s*<\s*([A-Z]\w*)|component\s*=\s*\{\s*([A-Z]\w*))")
        .expect("valid route target regex")
});

const PAGE_MARKERS: &[&str] = &["/pages/", "/app/", "page.", "route."];
const LAYOUT_MARKERS: &[&str] = &["layout", "header", "footer", "sidebar", "nav"];
const UTILITY_DIRS: &[&str] = &["/utils/", "/lib/", "/helpers/"];

/// Role of a source file from its path
pub fn classify_file_type(path: &str) -> FileType {
    let rooted = format!("/{}", path.to_lowercase());
    let file_name = basename(path);
    let lower_name = file_name.to_lowercase();

    if PAGE_MARKERS.iter().any(|marker| rooted.contains(marker)) {
        FileType::Page
    } else if LAYOUT_MARKERS.iter().any(|marker| lower_name.contains(marker)) {
        FileType::Layout
    } else if file_name.starts_with("use") {
        FileType::Hook
    } else if UTILITY_DIRS.iter().any(|dir| rooted.contains(dir))
        || !(lower_name.ends_with(".jsx") || lower_name.ends_with(".tsx"))
    {
        FileType::Utility
    } else {
        FileType::Component
    }
}

/// Import sources in order of appearance, deduplicated
pub fn extract_imports(content: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();
    for re in [&*IMPORT_RE, &*REQUIRE_RE] {
        for caps in re.captures_iter(content) {
            if let Some(source) = caps.get(1) {
                found.push((source.start(), source.as_str().to_string()));
            }
        }
    }
    found.sort_by_key(|(offset, _)| *offset);

    let mut imports = Vec::new();
    for (_, source) in found {
        if !imports.contains(&source) {
            imports.push(source);
        }
    }
    imports
}

/// The first capitalized function/const definition, with the capitalized
/// JSX tags the file renders
pub fn extract_component_info(content: &str) -> Option<ComponentInfo> {
    let caps = COMPONENT_DEF_RE.captures(content)?;
    let name = caps.get(1).or_else(|| caps.get(2))?.as_str().to_string();

    let mut child_components: Vec<String> = Vec::new();
    for tag in JSX_TAG_RE.captures_iter(content).filter_map(|c| c.get(1)) {
        let tag = tag.as_str();
        if tag != name && !child_components.iter().any(|c| c == tag) {
            child_components.push(tag.to_string());
        }
    }

    Some(ComponentInfo {
        name,
        child_components,
    })
}

/// `<Route path=".." element={<X />}>` and `component={X}` declarations in
/// source order
pub fn extract_routes(content: &str) -> Vec<RouteEntry> {
    ROUTE_RE
        .find_iter(content)
        .filter_map(|tag| {
            let tag = tag.as_str();
            let path = ROUTE_PATH_RE.captures(tag)?.get(1)?.as_str().to_string();
            let target = ROUTE_TARGET_RE.captures(tag)?;
            let component = target.get(1).or_else(|| target.get(2))?.as_str().to_string();
            Some(RouteEntry { path, component })
        })
        .collect()
}
