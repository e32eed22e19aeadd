use locator_protocol::path_filters::basename;
use locator_protocol::{ComponentType, ElementType, SearchResult, TargetSelection};

const COMPONENT_EXTENSIONS: &[&str] = &[".jsx", ".tsx"];

fn selection(result: &SearchResult, reason: impl Into<String>) -> TargetSelection {
    TargetSelection {
        file_path: result.file_path.clone(),
        line_number: result.line_number,
        reason: reason.into(),
    }
}

fn is_removal(edit_type: &str) -> bool {
    edit_type == "REMOVE_ELEMENT" || edit_type.contains("DELETE")
}

fn style_target(results: &[SearchResult]) -> Option<TargetSelection> {
    if let Some(hit) = results
        .iter()
        .find(|r| r.element_type == Some(ElementType::Style) && r.has_extension(COMPONENT_EXTENSIONS))
    {
        return Some(selection(hit, "Styling location in component file"));
    }
    results
        .iter()
        .find(|r| r.has_extension(COMPONENT_EXTENSIONS))
        .map(|hit| selection(hit, format!("Style edit in {}", basename(&hit.file_path))))
}

fn removal_target(results: &[SearchResult]) -> Option<TargetSelection> {
    if let Some(hit) = results
        .iter()
        .find(|r| r.element_type == Some(ElementType::Jsx))
    {
        return Some(selection(hit, "JSX element to remove"));
    }
    results
        .iter()
        .find(|r| {
            r.line_content.contains("return")
                || r.context_after
                    .iter()
                    .any(|line| line.contains('<') && line.contains('>'))
        })
        .map(|hit| selection(hit, "Return statement for element removal"))
}

fn feature_target(results: &[SearchResult]) -> Option<TargetSelection> {
    if let Some(hit) = results
        .iter()
        .find(|r| r.component_type == Some(ComponentType::Page))
    {
        return Some(selection(hit, "Page component for new feature"));
    }
    results
        .iter()
        .find(|r| r.component_type == Some(ComponentType::Layout))
        .map(|hit| selection(hit, "Layout component for new feature"))
}

/// Pick the single edit location for an edit type from ranked results.
///
/// `edit_type` is matched by name, so callers may pass types outside the
/// classifier's set (for example `REMOVE_ELEMENT`). Returns `None` only for
/// an empty result list.
pub fn select_target_file(results: &[SearchResult], edit_type: &str) -> Option<TargetSelection> {
    let best = results.first()?;
    let edit_type = edit_type.trim().to_ascii_uppercase();

    let preferred = match edit_type.as_str() {
        "UPDATE_STYLE" => style_target(results),
        "ADD_FEATURE" => feature_target(results),
        kind if is_removal(kind) => removal_target(results),
        _ => None,
    };
    if let Some(target) = preferred {
        log::debug!("Selected {}:{} ({})", target.file_path, target.line_number, target.reason);
        return Some(target);
    }

    let component = best.component_type.map_or("unknown", ComponentType::as_str);
    let element = best.element_type.map_or("unknown", ElementType::as_str);
    Some(selection(
        best,
        format!("{} confidence match in {component} ({element})", best.confidence),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use locator_protocol::ConfidenceTier;
    use pretty_assertions::assert_eq;

    fn result(
        path: &str,
        line: usize,
        confidence: ConfidenceTier,
        component_type: ComponentType,
        element_type: Option<ElementType>,
    ) -> SearchResult {
        SearchResult {
            file_path: path.to_string(),
            line_number: line,
            line_content: String::new(),
            matched_term: None,
            matched_pattern: None,
            context_before: Vec::new(),
            context_after: Vec::new(),
            confidence,
            component_type: Some(component_type),
            element_type,
        }
    }

    #[test]
    fn empty_results_select_nothing() {
        assert_eq!(select_target_file(&[], "UPDATE_STYLE"), None);
        assert_eq!(select_target_file(&[], "anything"), None);
    }

    #[test]
    fn style_edits_prefer_style_lines_in_component_files() {
        let results = vec![
            result("src/pages/Home.jsx", 3, ConfidenceTier::High, ComponentType::Page, Some(ElementType::Jsx)),
            result("src/components/Hero.jsx", 7, ConfidenceTier::Medium, ComponentType::Component, Some(ElementType::Style)),
        ];
        let target = select_target_file(&results, "UPDATE_STYLE").unwrap();
        assert_eq!(target.file_path, "src/components/Hero.jsx");
        assert_eq!(target.line_number, 7);
        assert_eq!(target.reason, "Styling location in component file");
    }

    #[test]
    fn style_edits_fall_back_to_any_component_file() {
        let results = vec![
            result("src/theme.js", 1, ConfidenceTier::High, ComponentType::Utility, None),
            result("src/components/Nav.tsx", 2, ConfidenceTier::Medium, ComponentType::Component, Some(ElementType::Jsx)),
        ];
        let target = select_target_file(&results, "update_style").unwrap();
        assert_eq!(target.file_path, "src/components/Nav.tsx");
        assert_eq!(target.reason, "Style edit in Nav.tsx");
    }

    #[test]
    fn removals_prefer_jsx_then_return() {
        let mut returning = result("src/components/Hero.jsx", 2, ConfidenceTier::High, ComponentType::Component, Some(ElementType::Function));
        returning.line_content = "return (".to_string();
        let jsx = result("src/components/Hero.jsx", 4, ConfidenceTier::Medium, ComponentType::Component, Some(ElementType::Jsx));

        let target = select_target_file(&[returning.clone(), jsx], "REMOVE_ELEMENT").unwrap();
        assert_eq!(target.line_number, 4);
        assert_eq!(target.reason, "JSX element to remove");

        let target = select_target_file(&[returning], "DELETE_SECTION").unwrap();
        assert_eq!(target.reason, "Return statement for element removal");
    }

    #[test]
    fn features_prefer_pages_then_layouts() {
        let results = vec![
            result("src/components/Card.jsx", 1, ConfidenceTier::High, ComponentType::Component, None),
            result("src/components/Layout.jsx", 5, ConfidenceTier::High, ComponentType::Layout, None),
        ];
        let target = select_target_file(&results, "ADD_FEATURE").unwrap();
        assert_eq!(target.reason, "Layout component for new feature");
    }

    #[test]
    fn other_types_take_the_top_result() {
        let results = vec![result(
            "src/components/Card.jsx",
            9,
            ConfidenceTier::Medium,
            ComponentType::Component,
            Some(ElementType::Jsx),
        )];
        let target = select_target_file(&results, "FIX_ISSUE").unwrap();
        assert_eq!(target.line_number, 9);
        assert_eq!(target.reason, "medium confidence match in component (jsx)");
    }
}
