//! Per-category file resolvers.
//!
//! Each resolver is a pure function of `(prompt, manifest)`. The component
//! resolvers return at most one file: edits stay focused on a single file
//! rather than spreading across every loose match.

use crate::tokens::{extract_action_phrase, extract_component_names, extract_quoted};
use locator_protocol::path_filters::basename;
use locator_protocol::ProjectManifest;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub(crate) type Resolver = fn(&str, &ProjectManifest) -> Vec<String>;

const MAX_RECENT_FILES: usize = 5;

/// Common UI element names matched against file basenames when no prompt
/// token names a file directly
const UI_ELEMENTS: &[&str] = &[
    "header",
    "footer",
    "nav",
    "sidebar",
    "button",
    "card",
    "modal",
    "hero",
    "banner",
    "about",
    "services",
    "features",
    "testimonials",
    "gallery",
    "contact",
    "team",
    "pricing",
];

const PACKAGE_FILES: &[&str] = &["package.json", "vite.config.js", "tsconfig.json"];

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\b(?:in|to|on|inside)\s+(?:the\s+)?(\w+)")
        .case_insensitive(true)
        .build()
        .expect("valid location regex")
});

static PROBLEM_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"error|bug|issue|problem|broken|not working")
        .case_insensitive(true)
        .build()
        .expect("valid problem regex")
});

fn push_unique(files: &mut Vec<String>, path: &str) {
    if !files.iter().any(|existing| existing == path) {
        files.push(path.to_string());
    }
}

fn is_component_source(path: &str) -> bool {
    path.ends_with(".jsx") || path.ends_with(".tsx")
}

/// Files whose content mentions a quoted string or the removal target.
///
/// Only the first matching file is returned; with no content hit this falls
/// back to [`find_component_files`].
pub fn find_component_by_content(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    let mut terms = extract_quoted(prompt);
    if let Some(phrase) = extract_action_phrase(prompt) {
        terms.push(phrase);
    }
    let terms: Vec<String> = terms
        .into_iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.trim().is_empty())
        .collect();

    if !terms.is_empty() {
        let hit = manifest
            .files
            .iter()
            .filter(|(path, _)| is_component_source(path))
            .find(|(_, record)| {
                let content = record.content.to_lowercase();
                terms.iter().any(|term| content.contains(term.as_str()))
            });
        if let Some((path, _)) = hit {
            log::debug!("Content match for {terms:?} in {path}");
            return vec![path.clone()];
        }
    }

    find_component_files(prompt, manifest)
}

/// Files whose basename or component name contains a prompt token.
///
/// Falls back to well-known UI element names, then to the entry point. At
/// most one file is returned.
pub fn find_component_files(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    let words = extract_component_names(prompt);

    let by_name = manifest.files.iter().find(|(path, record)| {
        let file_name = basename(path).to_lowercase();
        let component = record.component_name().map(str::to_lowercase);
        words.iter().any(|word| {
            file_name.contains(word.as_str())
                || component
                    .as_deref()
                    .is_some_and(|name| name.contains(word.as_str()))
        })
    });
    if let Some((path, _)) = by_name {
        return vec![path.clone()];
    }

    let lower_prompt = prompt.to_lowercase();
    for element in UI_ELEMENTS {
        if !lower_prompt.contains(element) {
            continue;
        }
        let with_dot = format!("{element}.");
        for path in manifest.paths() {
            let file_name = basename(path).to_lowercase();
            if file_name.contains(&with_dot) || file_name == *element {
                return vec![path.to_string()];
            }
        }
    }

    vec![manifest.entry_point.clone()]
}

/// Where new pages, sections or components should be wired in
pub fn find_feature_insertion_points(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    let mut files = Vec::new();
    let lower_prompt = prompt.to_lowercase();

    if lower_prompt.contains("page") {
        for (path, record) in &manifest.files {
            let routes_here = record.content.contains("Route")
                || record.content.contains("createBrowserRouter")
                || path.contains("router")
                || path.contains("routes");
            if routes_here {
                push_unique(&mut files, path);
            }
        }
        if !manifest.entry_point.is_empty() {
            push_unique(&mut files, &manifest.entry_point);
        }
    }

    let wants_component = ["component", "section", "add", "create"]
        .iter()
        .any(|needle| lower_prompt.contains(needle));
    if wants_component {
        let location = LOCATION_RE
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        if let Some(location) = location {
            for path in find_component_files(&location, manifest) {
                push_unique(&mut files, &path);
            }
        } else {
            for word in extract_component_names(prompt) {
                let related = find_component_files(&word, manifest);
                if related
                    .first()
                    .is_some_and(|first| *first != manifest.entry_point)
                {
                    for path in related {
                        push_unique(&mut files, &path);
                    }
                }
            }
            if files.is_empty() {
                files.push(manifest.entry_point.clone());
            }
        }
    }

    files
}

/// Recently modified files (on problem language) plus the named component
pub fn find_problem_files(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    let mut files = Vec::new();

    if PROBLEM_RE.is_match(prompt) {
        let mut recent: Vec<(&String, u64)> = manifest
            .files
            .iter()
            .map(|(path, record)| (path, record.last_modified))
            .collect();
        recent.sort_by(|a, b| b.1.cmp(&a.1));
        for (path, _) in recent.into_iter().take(MAX_RECENT_FILES) {
            push_unique(&mut files, path);
        }
    }

    for path in find_component_files(prompt, manifest) {
        push_unique(&mut files, &path);
    }
    files
}

/// Stylesheets, the Tailwind config, and the named component
pub fn find_style_files(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    let mut files = Vec::new();
    for path in &manifest.style_files {
        push_unique(&mut files, path);
    }
    if let Some(config) = manifest.paths().find(|p| p.contains("tailwind.config")) {
        push_unique(&mut files, config);
    }
    for path in find_component_files(prompt, manifest) {
        push_unique(&mut files, &path);
    }
    files
}

pub(crate) fn find_refactor_targets(prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    find_component_files(prompt, manifest)
}

pub(crate) fn find_rebuild_target(_prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    vec![manifest.entry_point.clone()]
}

/// `package.json`, `vite.config.js` and `tsconfig.json` anywhere in the project
pub fn find_package_files(_prompt: &str, manifest: &ProjectManifest) -> Vec<String> {
    manifest
        .paths()
        .filter(|path| PACKAGE_FILES.contains(&basename(path)))
        .map(str::to_string)
        .collect()
}
