use crate::tokens::{
    extract_action_phrase, extract_component_names, extract_quoted, extract_replace_subject,
    is_action_word,
};
use locator_protocol::{EditIntent, EditType, FallbackSearch, SearchPlan};

fn type_patterns(edit_type: EditType) -> Vec<String> {
    let patterns: &[&str] = match edit_type {
        EditType::UpdateStyle => &[r"className\s*="],
        EditType::AddFeature => &[r"return\s*\("],
        EditType::AddDependency => &[r#""dependencies"\s*:"#],
        EditType::UpdateComponent
        | EditType::FixIssue
        | EditType::Refactor
        | EditType::FullRebuild => &[],
    };
    patterns.iter().map(|p| p.to_string()).collect()
}

fn push_unique(terms: &mut Vec<String>, term: String) {
    if !terms.iter().any(|t| t.eq_ignore_ascii_case(&term)) {
        terms.push(term);
    }
}

/// Heuristic search plan for a classified prompt.
///
/// Literal strings from the prompt (quoted text, the thing being removed or
/// replaced) become primary terms; component-name tokens fill in when there
/// are none and otherwise become fallback terms. The intent's target files
/// are searched first.
pub fn build_search_plan(prompt: &str, intent: &EditIntent) -> SearchPlan {
    let mut literal = Vec::new();
    for quoted in extract_quoted(prompt) {
        push_unique(&mut literal, quoted);
    }
    if let Some(phrase) = extract_action_phrase(prompt) {
        push_unique(&mut literal, phrase);
    }
    if let Some(subject) = extract_replace_subject(prompt) {
        push_unique(&mut literal, subject);
    }

    let names: Vec<String> = extract_component_names(prompt)
        .into_iter()
        .filter(|word| !is_action_word(word))
        .collect();

    let patterns = type_patterns(intent.edit_type);
    let mut plan = if literal.is_empty() {
        SearchPlan::for_terms(names.clone()).patterns(patterns.clone())
    } else {
        SearchPlan::for_terms(literal)
    };

    let fallback_terms: Vec<String> = names
        .into_iter()
        .filter(|name| !plan.search_terms.iter().any(|t| t.eq_ignore_ascii_case(name)))
        .collect();
    let fallback_patterns = if plan.regex_patterns.is_empty() {
        patterns
    } else {
        Vec::new()
    };
    if !fallback_terms.is_empty() || !fallback_patterns.is_empty() {
        plan = plan.fallback(FallbackSearch {
            terms: fallback_terms,
            patterns: fallback_patterns,
        });
    }

    if intent.edit_type == EditType::AddDependency {
        plan.file_types_to_search.push(".json".to_string());
    }

    plan.priority_files(intent.target_files.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn intent(edit_type: EditType, targets: &[&str]) -> EditIntent {
        EditIntent {
            edit_type,
            target_files: targets.iter().map(|t| t.to_string()).collect(),
            confidence: 0.9,
            description: String::new(),
            suggested_context: Vec::new(),
        }
    }

    #[test]
    fn removal_phrase_is_primary_term() {
        let plan = build_search_plan(
            "remove start deploying button",
            &intent(EditType::UpdateComponent, &["src/components/Hero.jsx"]),
        );
        assert_eq!(plan.search_terms, vec!["start deploying"]);
        assert!(plan.regex_patterns.is_empty());
        assert_eq!(plan.priority_files, vec!["src/components/Hero.jsx"]);
        let fallback = plan.fallback_search.expect("fallback");
        assert_eq!(fallback.terms, vec!["start", "deploying", "button"]);
    }

    #[test]
    fn style_prompt_uses_names_and_class_patterns() {
        let plan = build_search_plan(
            "make the header blue",
            &intent(EditType::UpdateStyle, &["src/components/Header.jsx"]),
        );
        assert_eq!(plan.search_terms, vec!["header", "blue"]);
        assert_eq!(plan.regex_patterns, vec![r"className\s*="]);
        assert!(plan.fallback_search.is_none());
    }

    #[test]
    fn dependency_plan_searches_json() {
        let plan = build_search_plan(
            "install zod",
            &intent(EditType::AddDependency, &["package.json"]),
        );
        assert!(plan.file_types_to_search.contains(&".json".to_string()));
        assert_eq!(plan.search_terms, vec!["zod"]);
    }
}
