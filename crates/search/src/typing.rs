//! Structural typing of matched files and lines.

use locator_protocol::path_filters::basename;
use locator_protocol::{ComponentType, ElementType};
use once_cell::sync::Lazy;
use regex::Regex;

const PAGE_MARKERS: &[&str] = &["/pages/", "/app/", "page.", "route."];
const LAYOUT_MARKERS: &[&str] = &["layout", "header", "footer", "sidebar"];
const UTILITY_DIRS: &[&str] = &["/utils/", "/lib/", "/helpers/"];
const STYLE_MARKERS: &[&str] = &["className", "style=", "style={", "css`", "styled.", "tw`"];
const STATE_MARKERS: &[&str] = &["useState", "useReducer", "const ["];

// Lines looked at on each side when the line itself is untyped
const INFERENCE_WINDOW: usize = 2;

static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\b|=\s*(?:async\s*)?\([^)]*\)\s*=>|=\s*(?:async\s+)?\w+\s*=>",
    )
    .expect("valid function regex")
});

/// Role of a file in the app, from its path (and, for hooks, its content)
pub fn classify_component(path: &str, content: &str) -> ComponentType {
    let rooted = format!("/{}", path.replace('\\', "/").to_lowercase());
    let file_name = basename(path);
    let lower_name = file_name.to_lowercase();

    if PAGE_MARKERS.iter().any(|marker| rooted.contains(marker)) {
        return ComponentType::Page;
    }
    if LAYOUT_MARKERS.iter().any(|marker| rooted.contains(marker)) {
        return ComponentType::Layout;
    }
    if file_name.starts_with("use") || content.contains("function use") {
        return ComponentType::Hook;
    }
    let is_jsx = lower_name.ends_with(".jsx") || lower_name.ends_with(".tsx");
    if !is_jsx || UTILITY_DIRS.iter().any(|dir| rooted.contains(dir)) {
        return ComponentType::Utility;
    }
    ComponentType::Component
}

fn is_jsx_line(line: &str) -> bool {
    line.contains('<') && line.contains('>')
}

fn classify_own_line(line: &str) -> Option<ElementType> {
    let trimmed = line.trim();
    if is_jsx_line(trimmed) {
        return Some(ElementType::Jsx);
    }
    if STYLE_MARKERS.iter().any(|marker| trimmed.contains(marker)) {
        return Some(ElementType::Style);
    }
    if trimmed.starts_with("import") || trimmed.starts_with("require(") {
        return Some(ElementType::Import);
    }
    if STATE_MARKERS.iter().any(|marker| trimmed.contains(marker)) {
        return Some(ElementType::State);
    }
    if FUNCTION_RE.is_match(trimmed) {
        return Some(ElementType::Function);
    }
    None
}

/// What kind of code a line is.
///
/// Lines that are none of the known kinds (a bare text node, a closing
/// paren) borrow `jsx` or `style` from the nearest neighbouring lines.
pub fn classify_element(
    line: &str,
    context_before: &[String],
    context_after: &[String],
) -> Option<ElementType> {
    if let Some(kind) = classify_own_line(line) {
        return Some(kind);
    }

    let before = context_before.iter().rev().take(INFERENCE_WINDOW);
    let after = context_after.iter().take(INFERENCE_WINDOW);
    let neighbours: Vec<&String> = before.chain(after).collect();

    if neighbours.iter().any(|n| is_jsx_line(n)) {
        return Some(ElementType::Jsx);
    }
    if neighbours
        .iter()
        .any(|n| STYLE_MARKERS.iter().any(|marker| n.contains(marker)))
    {
        return Some(ElementType::Style);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_types_follow_path_rules() {
        assert_eq!(classify_component("src/pages/Home.jsx", ""), ComponentType::Page);
        assert_eq!(classify_component("app/page.tsx", ""), ComponentType::Page);
        assert_eq!(classify_component("pages/About.jsx", ""), ComponentType::Page);
        assert_eq!(
            classify_component("src/components/Header.jsx", ""),
            ComponentType::Layout
        );
        assert_eq!(classify_component("src/hooks/useCart.js", ""), ComponentType::Hook);
        assert_eq!(
            classify_component("src/state.js", "export function useStore() {}"),
            ComponentType::Hook
        );
        assert_eq!(classify_component("src/utils/format.js", ""), ComponentType::Utility);
        assert_eq!(classify_component("src/lib/Card.jsx", ""), ComponentType::Utility);
        assert_eq!(
            classify_component("src/components/Hero.jsx", "<section />"),
            ComponentType::Component
        );
    }

    #[test]
    fn element_types_follow_line_rules() {
        let none: &[String] = &[];
        let cases = [
            ("<button>Go</button>", Some(ElementType::Jsx)),
            ("className=\"text-blue-500\"", Some(ElementType::Style)),
            ("import Hero from './Hero'", Some(ElementType::Import)),
            ("require('./polyfills')", Some(ElementType::Import)),
            ("const api = require('api')", None),
            ("const [open, setOpen] = useState(false)", Some(ElementType::State)),
            ("export default function Hero() {", Some(ElementType::Function)),
            ("const onClick = (e) => {", Some(ElementType::Function)),
            ("const total = 1 + 2", None),
        ];
        for (line, expected) in cases {
            assert_eq!(classify_element(line, none, none), expected, "{line}");
        }
    }

    #[test]
    fn untyped_lines_borrow_from_neighbours() {
        let before = vec!["<h1>".to_string()];
        let after = vec!["</h1>".to_string()];
        assert_eq!(
            classify_element("Welcome aboard", &before, &after),
            Some(ElementType::Jsx)
        );
        let far = vec!["<div>".to_string(), "x".to_string(), "y".to_string()];
        assert_eq!(classify_element("Welcome", &far, &[]), None);
    }
}
