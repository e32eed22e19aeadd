use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::confidence::{score_match, MatchSignals};
use crate::expansion::SynonymExpander;
use crate::settings::{SearchSettings, SemanticExpansion};
use crate::typing::{classify_component, classify_element};
use locator_protocol::path_filters::{extension_allowed, matches_any, path_matches};
use locator_protocol::{
    element_priority, SearchExecutionResult, SearchPlan, SearchResult, SearchType,
};
use regex::{Regex, RegexBuilder};

/// One rung of the fallback ladder
struct Tier<'a> {
    search_type: SearchType,
    terms: &'a [String],
    patterns: &'a [String],
}

struct CompiledPattern {
    source: String,
    regex: Regex,
}

fn compile_patterns(patterns: &[String]) -> Vec<CompiledPattern> {
    patterns
        .iter()
        .filter(|source| !source.trim().is_empty())
        .filter_map(|source| {
            match RegexBuilder::new(source).case_insensitive(true).build() {
                Ok(regex) => Some(CompiledPattern {
                    source: source.clone(),
                    regex,
                }),
                Err(err) => {
                    log::warn!("Skipping invalid search pattern {source:?}: {err}");
                    None
                }
            }
        })
        .collect()
}

enum LineMatch<'a> {
    Term { term: &'a str, exact: bool },
    Pattern(&'a str),
}

fn match_line<'a>(
    line: &str,
    terms: &'a [(String, String)],
    patterns: &'a [CompiledPattern],
) -> Option<LineMatch<'a>> {
    let lower = line.to_lowercase();
    for (term, lower_term) in terms {
        if lower.contains(lower_term.as_str()) {
            return Some(LineMatch::Term {
                term: term.as_str(),
                exact: line.contains(term.as_str()),
            });
        }
    }
    patterns
        .iter()
        .find(|p| p.regex.is_match(line))
        .map(|p| LineMatch::Pattern(p.source.as_str()))
}

fn ranking(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.confidence
        .rank()
        .cmp(&a.confidence.rank())
        .then_with(|| {
            let pa = a.component_type.map_or(0, |c| c.priority());
            let pb = b.component_type.map_or(0, |c| c.priority());
            pb.cmp(&pa)
        })
        .then_with(|| element_priority(b.element_type).cmp(&element_priority(a.element_type)))
}

/// Line-level content search over a path -> content map
pub struct SearchEngine {
    settings: SearchSettings,
    expander: SynonymExpander,
}

impl SearchEngine {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            expander: SynonymExpander::new(),
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Run a plan through the fallback ladder.
    ///
    /// Later tiers run only while every earlier tier found nothing at all.
    /// Never fails: a fruitless search comes back with `success: false` and
    /// an `error` message.
    pub fn execute(
        &self,
        plan: &SearchPlan,
        files: &BTreeMap<String, String>,
    ) -> SearchExecutionResult {
        let started = Instant::now();
        let candidates = self.candidate_files(plan, files);
        log::debug!(
            "Searching {} of {} files for {:?}",
            candidates.len(),
            files.len(),
            plan.search_terms
        );

        let semantic_allowed = match self.settings.semantic_expansion {
            SemanticExpansion::Always => true,
            SemanticExpansion::WithFallback => plan.fallback_search.is_some(),
            SemanticExpansion::Never => false,
        };
        let expanded = if semantic_allowed {
            self.expander.expand_all(&plan.search_terms)
        } else {
            Vec::new()
        };

        let mut tiers = vec![Tier {
            search_type: SearchType::Exact,
            terms: &plan.search_terms,
            patterns: &plan.regex_patterns,
        }];
        if let Some(fallback) = &plan.fallback_search {
            tiers.push(Tier {
                search_type: SearchType::Fuzzy,
                terms: &fallback.terms,
                patterns: &fallback.patterns,
            });
        }
        if !expanded.is_empty() {
            tiers.push(Tier {
                search_type: SearchType::Semantic,
                terms: &expanded,
                patterns: &[],
            });
        }

        let mut results: Vec<SearchResult> = Vec::new();
        let mut search_type = SearchType::Exact;
        let mut tried = Vec::new();
        for tier in &tiers {
            search_type = tier.search_type;
            tried.push(tier.search_type.as_str());
            results = self.search_tier(tier, &candidates);
            log::debug!(
                "{} tier found {} matches",
                tier.search_type.as_str(),
                results.len()
            );
            if !results.is_empty() {
                break;
            }
        }

        results.sort_by(ranking);
        if let Some(max) = self.settings.max_results {
            results.truncate(max);
        }

        let success = !results.is_empty();
        let error = (!success).then(|| {
            format!(
                "No matches found for search terms: {} (tried {} search)",
                describe_terms(plan),
                tried.join(", ")
            )
        });

        SearchExecutionResult {
            success,
            results,
            files_searched: candidates.len(),
            execution_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            used_fallback: search_type != SearchType::Exact,
            search_type,
            error,
        }
    }

    /// Files to scan, priority matches first, otherwise in path order
    fn candidate_files<'a>(
        &self,
        plan: &SearchPlan,
        files: &'a BTreeMap<String, String>,
    ) -> Vec<(&'a str, &'a str)> {
        let file_types = if plan.file_types_to_search.is_empty() {
            &self.settings.default_file_types
        } else {
            &plan.file_types_to_search
        };

        let mut candidates: Vec<(&str, &str)> = files
            .iter()
            .filter(|(path, _)| extension_allowed(path, file_types))
            .filter(|(path, _)| !matches_any(path, &plan.exclude_files))
            .map(|(path, content)| (path.as_str(), content.as_str()))
            .collect();

        candidates.sort_by_key(|(path, _)| {
            plan.priority_files
                .iter()
                .position(|entry| path_matches(path, entry))
                .unwrap_or(usize::MAX)
        });
        candidates
    }

    fn search_tier(&self, tier: &Tier<'_>, candidates: &[(&str, &str)]) -> Vec<SearchResult> {
        let terms: Vec<(String, String)> = tier
            .terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| (t.to_string(), t.to_lowercase()))
            .collect();
        let patterns = compile_patterns(tier.patterns);
        if terms.is_empty() && patterns.is_empty() {
            return Vec::new();
        }

        let context = self.settings.context_lines;
        let mut results = Vec::new();
        for (path, content) in candidates {
            let component_type = classify_component(path, content);
            let lines: Vec<&str> = content.lines().collect();

            for (idx, &line) in lines.iter().enumerate() {
                let Some(found) = match_line(line, &terms, &patterns) else {
                    continue;
                };

                let context_before: Vec<String> = lines[idx.saturating_sub(context)..idx]
                    .iter()
                    .map(|l| l.to_string())
                    .collect();
                let after_end = (idx + 1 + context).min(lines.len());
                let context_after: Vec<String> = lines[idx + 1..after_end]
                    .iter()
                    .map(|l| l.to_string())
                    .collect();

                let element_type = classify_element(line, &context_before, &context_after);
                let (matched_term, matched_pattern, exact_term) = match found {
                    LineMatch::Term { term, exact } => (Some(term.to_string()), None, exact),
                    LineMatch::Pattern(source) => (None, Some(source.to_string()), false),
                };
                let confidence = score_match(&MatchSignals {
                    line,
                    context_after: &context_after,
                    component_type,
                    element_type,
                    exact_term,
                });

                results.push(SearchResult {
                    file_path: (*path).to_string(),
                    line_number: idx + 1,
                    line_content: line.trim().to_string(),
                    matched_term,
                    matched_pattern,
                    context_before,
                    context_after,
                    confidence,
                    component_type: Some(component_type),
                    element_type,
                });
            }
        }
        results
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

fn describe_terms(plan: &SearchPlan) -> String {
    let mut parts: Vec<&str> = plan.search_terms.iter().map(String::as_str).collect();
    parts.extend(plan.regex_patterns.iter().map(String::as_str));
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}

/// Run `plan` over `files` with default settings
pub fn execute_search_plan(
    plan: &SearchPlan,
    files: &BTreeMap<String, String>,
) -> SearchExecutionResult {
    SearchEngine::default().execute(plan, files)
}
