/// Normalize a project path to the manifest's key form: forward slashes, no
/// leading `./`.
pub fn normalize_path(raw: &str) -> String {
    let mut value = raw.trim().replace('\\', "/");
    while value.starts_with("./") {
        value = value[2..].to_string();
    }
    value
}

/// Last path segment
pub fn basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Extension including the leading dot, e.g. `.jsx`
pub fn extension(path: &str) -> Option<&str> {
    let name = basename(path);
    name.rfind('.').map(|idx| &name[idx..])
}

/// Does `path` match a priority/exclude entry?
///
/// Plain entries match as substrings (so `Header` selects
/// `src/components/Header.jsx`); entries containing `*` or `?` are globs.
pub fn path_matches(path: &str, pattern: &str) -> bool {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return false;
    }
    let path = path.replace('\\', "/");

    if !pattern.contains('*') && !pattern.contains('?') {
        return path.contains(&normalize_path(pattern));
    }

    glob::Pattern::new(pattern)
        .map(|p| p.matches(&path))
        .unwrap_or(false)
}

pub fn matches_any(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| path_matches(path, pattern))
}

/// Is the file's extension one of `extensions` (each with a leading dot)?
pub fn extension_allowed(path: &str, extensions: &[String]) -> bool {
    let Some(ext) = extension(path) else {
        return false;
    };
    extensions.iter().any(|candidate| {
        let candidate = candidate.trim();
        let candidate = candidate.strip_prefix('.').unwrap_or(candidate);
        ext[1..].eq_ignore_ascii_case(candidate)
    })
}
