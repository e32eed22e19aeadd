use std::collections::HashMap;

/// UI vocabulary: each key with the words people use for the same element
const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("header", &["navigation", "navbar", "nav", "appbar", "top"]),
    ("button", &["btn", "cta", "action", "link"]),
    ("footer", &["bottom", "copyright", "social"]),
    ("hero", &["banner", "jumbotron", "main", "landing"]),
    ("input", &["field", "form control", "textbox"]),
    ("modal", &["dialog", "popup", "overlay"]),
    ("card", &["panel", "box", "container", "item"]),
];

/// Bidirectional synonym expander for the last rung of the search fallback
/// ladder
pub struct SynonymExpander {
    /// word -> every other member of its group
    synonyms: HashMap<String, Vec<String>>,
}

impl SynonymExpander {
    pub fn new() -> Self {
        let mut synonyms: HashMap<String, Vec<String>> = HashMap::new();

        for (key, words) in SYNONYM_GROUPS {
            let group: Vec<&str> = std::iter::once(*key).chain(words.iter().copied()).collect();
            for member in &group {
                let others = group
                    .iter()
                    .filter(|other| *other != member)
                    .map(|other| other.to_string());
                synonyms
                    .entry(member.to_string())
                    .or_default()
                    .extend(others);
            }
        }

        Self { synonyms }
    }

    /// Synonyms for one search term, originals excluded
    pub fn expand(&self, term: &str) -> Vec<String> {
        let whole = term.trim().to_lowercase();
        let tokens: Vec<String> = tokenize(term).iter().map(|t| t.to_lowercase()).collect();

        let mut lookups = vec![whole.clone()];
        lookups.extend(tokens.iter().cloned());

        let mut expansions: Vec<String> = Vec::new();
        for lookup in &lookups {
            let Some(words) = self.synonyms.get(lookup) else {
                continue;
            };
            for word in words {
                let original = *word == whole || tokens.contains(word);
                if !original && !expansions.contains(word) {
                    expansions.push(word.clone());
                }
            }
        }
        expansions
    }

    /// Expansions of every term, in term order, without duplicates
    pub fn expand_all(&self, terms: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            for word in self.expand(term) {
                if !out.contains(&word) && !terms.iter().any(|t| t.eq_ignore_ascii_case(&word)) {
                    out.push(word);
                }
            }
        }
        out
    }
}

impl Default for SynonymExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on whitespace, `_`, `-` and camelCase boundaries
fn tokenize(term: &str) -> Vec<String> {
    term.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .flat_map(split_camel_case)
        .collect()
}

fn split_camel_case(word: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_upper = false;

    for ch in word.chars() {
        if ch.is_uppercase() {
            if !current.is_empty() && !prev_upper {
                tokens.push(std::mem::take(&mut current));
            }
            prev_upper = true;
        } else {
            prev_upper = false;
        }
        current.push(ch);
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_handles_case_and_separators() {
        assert_eq!(tokenize("primary button"), vec!["primary", "button"]);
        assert_eq!(tokenize("hero_banner"), vec!["hero", "banner"]);
        assert_eq!(tokenize("site-footer"), vec!["site", "footer"]);
        assert_eq!(tokenize("NavBar"), vec!["Nav", "Bar"]);
        assert_eq!(tokenize("ctaButton"), vec!["cta", "Button"]);
    }

    #[test]
    fn key_yields_its_synonyms() {
        let expander = SynonymExpander::new();
        assert_eq!(
            expander.expand("header"),
            vec!["navigation", "navbar", "nav", "appbar", "top"]
        );
    }

    #[test]
    fn synonym_yields_key_and_siblings() {
        let expander = SynonymExpander::new();
        assert_eq!(
            expander.expand("navbar"),
            vec!["header", "navigation", "nav", "appbar", "top"]
        );
        assert_eq!(expander.expand("form control"), vec!["input", "field", "textbox"]);
    }

    #[test]
    fn compound_terms_expand_per_token_without_originals() {
        let expander = SynonymExpander::new();
        let expanded = expander.expand("heroButton");
        assert!(expanded.contains(&"banner".to_string()));
        assert!(expanded.contains(&"btn".to_string()));
        assert!(!expanded.contains(&"hero".to_string()));
        assert!(!expanded.contains(&"button".to_string()));
    }

    #[test]
    fn unknown_terms_expand_to_nothing() {
        let expander = SynonymExpander::new();
        assert!(expander.expand("pricing").is_empty());
        assert!(expander
            .expand_all(&["header".to_string(), "nav".to_string()])
            .iter()
            .all(|w| w != "nav" && w != "header"));
    }
}
