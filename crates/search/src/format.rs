use locator_protocol::SearchResult;

/// Render the top `max` results as markdown for an editing prompt.
///
/// Each result shows its location, confidence and element kind, then the
/// captured context with the matched line marked `>`.
pub fn format_results_for_prompt(results: &[SearchResult], max: usize) -> String {
    if results.is_empty() || max == 0 {
        return "No matching code locations found.\n".to_string();
    }

    let shown = results.len().min(max);
    let mut out = String::new();
    out.push_str(&format!(
        "## Code locations ({shown} of {})\n",
        results.len()
    ));

    for (idx, result) in results.iter().take(max).enumerate() {
        let element = result.element_type.map_or("code", |e| e.as_str());
        out.push('\n');
        out.push_str(&format!(
            "### {}. {}:{} ({} confidence, {element})\n",
            idx + 1,
            result.file_path,
            result.line_number,
            result.confidence
        ));
        if let Some(term) = &result.matched_term {
            out.push_str(&format!("Matched term: `{term}`\n"));
        } else if let Some(pattern) = &result.matched_pattern {
            out.push_str(&format!("Matched pattern: `{pattern}`\n"));
        }

        let first_line = result.line_number.saturating_sub(result.context_before.len());
        out.push_str("```\n");
        for (offset, line) in result.context_before.iter().enumerate() {
            out.push_str(&format!("  {:>4} | {line}\n", first_line + offset));
        }
        out.push_str(&format!(
            "> {:>4} | {}\n",
            result.line_number, result.line_content
        ));
        for (offset, line) in result.context_after.iter().enumerate() {
            out.push_str(&format!(
                "  {:>4} | {line}\n",
                result.line_number + offset + 1
            ));
        }
        out.push_str("```\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use locator_protocol::{ComponentType, ConfidenceTier, ElementType};

    fn hero_result() -> SearchResult {
        SearchResult {
            file_path: "src/components/Hero.jsx".to_string(),
            line_number: 4,
            line_content: "<button>Start Deploying</button>".to_string(),
            matched_term: Some("start deploying".to_string()),
            matched_pattern: None,
            context_before: vec!["  return (".to_string(), "    <section>".to_string()],
            context_after: vec!["    </section>".to_string()],
            confidence: ConfidenceTier::Medium,
            component_type: Some(ComponentType::Component),
            element_type: Some(ElementType::Jsx),
        }
    }

    #[test]
    fn renders_numbered_context_window() {
        let text = format_results_for_prompt(&[hero_result()], 5);
        assert!(text.starts_with("## Code locations (1 of 1)\n"));
        assert!(text.contains("### 1. src/components/Hero.jsx:4 (medium confidence, jsx)"));
        assert!(text.contains("Matched term: `start deploying`"));
        assert!(text.contains("     2 |   return ("));
        assert!(text.contains(">    4 | <button>Start Deploying</button>"));
        assert!(text.contains("     5 |     </section>"));
    }

    #[test]
    fn respects_max_and_empty_input() {
        let results = vec![hero_result(), hero_result(), hero_result()];
        let text = format_results_for_prompt(&results, 2);
        assert!(text.contains("(2 of 3)"));
        assert!(!text.contains("### 3."));
        assert_eq!(
            format_results_for_prompt(&[], 5),
            "No matching code locations found.\n"
        );
    }
}
