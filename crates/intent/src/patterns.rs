use crate::resolvers::{self, Resolver};
use locator_protocol::EditType;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One edit category: its phrasings and the resolver that picks its files
pub(crate) struct PatternGroup {
    pub edit_type: EditType,
    pub patterns: Vec<Regex>,
    pub resolver: Resolver,
}

impl PatternGroup {
    fn new(edit_type: EditType, sources: &[&str], resolver: Resolver) -> Self {
        Self {
            edit_type,
            patterns: compile(edit_type, sources),
            resolver,
        }
    }

    /// First pattern (in list order) that matches anywhere in the prompt
    pub fn first_match(&self, prompt: &str) -> Option<&Regex> {
        self.patterns.iter().find(|re| re.is_match(prompt))
    }
}

fn compile(edit_type: EditType, sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .filter_map(|source| {
            match RegexBuilder::new(source).case_insensitive(true).build() {
                Ok(re) => Some(re),
                Err(err) => {
                    log::error!("Dropping invalid {edit_type} pattern {source}: {err}");
                    None
                }
            }
        })
        .collect()
}

const STYLE_PATTERNS: &[&str] = &[
    r"\b(?:change|update|set|adjust|tweak)\s+(?:the\s+)?.*\b(?:colou?rs?|theme|styles?|styling|css|fonts?|background|typography|spacing|padding|margins?)\b",
    r"\bmake\s+(?:it|them|everything|the\s+\w+(?:\s+\w+)?)\s+(?:more\s+)?(?:dark|darker|light|lighter|responsive|mobile|bigger|smaller|larger|bold|bolder|rounded|centered|transparent|red|blue|green|yellow|purple|pink|orange|black|white|gray|grey|indigo|teal)\b",
    r"\bstyle\s+(?:the\s+)?\w+",
    r"\b(?:dark|light)\s+(?:mode|theme)\b",
    r"\bresponsive\b",
    r"\b(?:tailwind|css)\s+class(?:es)?\b",
];

const COMPONENT_PATTERNS: &[&str] = &[
    r"\bupdate\s+(?:the\s+)?\w+\s+(?:component|section|page)\b",
    r"\bchange\s+(?:the\s+)?\w+",
    r"\bmodify\s+(?:the\s+)?\w+",
    r"\bedit\s+(?:the\s+)?\w+",
    r"\bfix\s+(?:the\s+)?\w+\s+(?:styling|style|css|layout)\b",
    r"\b(?:remove|delete|hide)\s+.*\s+(?:button|link|text|element|section)\b",
    r"\b(?:remove|delete|hide)\s+(?:the\s+)?\w+",
    r"\breplace\s+.+\s+with\b",
    r"\bupdate\s+(?:the\s+)?\w+",
];

const FEATURE_PATTERNS: &[&str] = &[
    r"\badd\s+(?:a\s+|an\s+)?(?:new\s+)?\w+\s+(?:page|section|feature|component)\b",
    r"\bcreate\s+(?:a\s+|an\s+)?(?:new\s+)?\w+\s+(?:page|section|feature|component)\b",
    r"\bimplement\s+(?:a\s+|an\s+)?(?:new\s+)?\w+\s+(?:page|section|feature)\b",
    r"\bbuild\s+(?:a\s+|an\s+)?(?:new\s+)?\w+\s+(?:page|section|feature)\b",
    r"\badd\s+\w+\s+to\s+(?:the\s+)?\w+",
    r"\badd\s+(?:a\s+|an\s+)?(?:new\s+|custom\s+)?\w+\s+(?:hook|state)\b",
    r"\badd\s+.*\bstate\b",
    r"\binclude\s+(?:a\s+|an\s+)?\w+",
];

const FIX_PATTERNS: &[&str] = &[
    r"\bfix\s+(?:the\s+)?\w+",
    r"\bresolve\s+(?:the\s+)?(?:error|issue|bug|problem)",
    r"\bdebug\s+(?:the\s+)?\w+",
    r"\b\w+\s+is\s+broken\b",
    r"\b\w+\s+(?:is\s+)?not\s+working\b",
    r"\b(?:bug|error|crash|crashes|crashing|exception)\b",
    r"\b(?:slow|performance|laggy)\b",
    r"\b(?:accessib\w*|a11y|aria|screen\s*reader)\b",
];

const REFACTOR_PATTERNS: &[&str] = &[
    r"\brefactor\w*\b",
    r"\bclean\s*up\s+(?:the\s+)?code\b",
    r"\breorgani[sz]e\w*",
    r"\boptimi[sz]e\s+(?:the\s+)?\w+",
    r"\bsplit\s+.+\s+into\b",
    r"\bextract\s+.+\bcomponents?\b",
];

const REBUILD_PATTERNS: &[&str] = &[
    r"\bstart\s+over\b",
    r"\brecreate\s+everything\b",
    r"\brebuild\s+(?:the\s+)?(?:whole\s+|entire\s+)?app\b",
    r"\bnew\s+app\b",
    r"\bfrom\s+scratch\b",
];

const DEPENDENCY_PATTERNS: &[&str] = &[
    r"\binstall\s+(?:the\s+)?[\w@/.-]+",
    r"\badd\s+(?:the\s+|a\s+|an\s+)?[\w@/.-]+\s+(?:package|library|dependency)\b",
    r"\buse\s+(?:the\s+|a\s+|an\s+)?[\w@/.-]+\s+(?:library|framework|package)\b",
    r"\b(?:npm|yarn|pnpm)\s+(?:add|install|i)\b",
];

/// Groups in priority order. Style comes before generic component edits so
/// that "make the header blue" is never absorbed by "update the header".
pub(crate) static PATTERN_GROUPS: Lazy<Vec<PatternGroup>> = Lazy::new(|| {
    vec![
        PatternGroup::new(
            EditType::UpdateStyle,
            STYLE_PATTERNS,
            resolvers::find_style_files,
        ),
        PatternGroup::new(
            EditType::UpdateComponent,
            COMPONENT_PATTERNS,
            resolvers::find_component_by_content,
        ),
        PatternGroup::new(
            EditType::AddFeature,
            FEATURE_PATTERNS,
            resolvers::find_feature_insertion_points,
        ),
        PatternGroup::new(
            EditType::FixIssue,
            FIX_PATTERNS,
            resolvers::find_problem_files,
        ),
        PatternGroup::new(
            EditType::Refactor,
            REFACTOR_PATTERNS,
            resolvers::find_refactor_targets,
        ),
        PatternGroup::new(
            EditType::FullRebuild,
            REBUILD_PATTERNS,
            resolvers::find_rebuild_target,
        ),
        PatternGroup::new(
            EditType::AddDependency,
            DEPENDENCY_PATTERNS,
            resolvers::find_package_files,
        ),
    ]
});

/// First group with a matching pattern, together with that pattern
pub(crate) fn match_group(prompt: &str) -> Option<(&'static PatternGroup, &'static Regex)> {
    PATTERN_GROUPS
        .iter()
        .find_map(|group| group.first_match(prompt).map(|re| (group, re)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(prompt: &str) -> Option<EditType> {
        match_group(prompt).map(|(group, _)| group.edit_type)
    }

    #[test]
    fn every_pattern_compiles() {
        let expected = STYLE_PATTERNS.len()
            + COMPONENT_PATTERNS.len()
            + FEATURE_PATTERNS.len()
            + FIX_PATTERNS.len()
            + REFACTOR_PATTERNS.len()
            + REBUILD_PATTERNS.len()
            + DEPENDENCY_PATTERNS.len();
        let compiled: usize = PATTERN_GROUPS.iter().map(|g| g.patterns.len()).sum();
        assert_eq!(compiled, expected);
    }

    #[test]
    fn groups_follow_priority_order() {
        let order: Vec<EditType> = PATTERN_GROUPS.iter().map(|g| g.edit_type).collect();
        assert_eq!(
            order,
            vec![
                EditType::UpdateStyle,
                EditType::UpdateComponent,
                EditType::AddFeature,
                EditType::FixIssue,
                EditType::Refactor,
                EditType::FullRebuild,
                EditType::AddDependency,
            ]
        );
    }

    #[test]
    fn style_language_wins_over_component_language() {
        assert_eq!(classify("make the header blue"), Some(EditType::UpdateStyle));
        assert_eq!(
            classify("update the header background color"),
            Some(EditType::UpdateStyle)
        );
        assert_eq!(classify("add dark mode"), Some(EditType::UpdateStyle));
        assert_eq!(classify("update the header"), Some(EditType::UpdateComponent));
    }

    #[test]
    fn representative_prompts_per_group() {
        assert_eq!(
            classify("remove start deploying button"),
            Some(EditType::UpdateComponent)
        );
        assert_eq!(
            classify("fix the navbar layout"),
            Some(EditType::UpdateComponent)
        );
        assert_eq!(classify("add a videos page"), Some(EditType::AddFeature));
        assert_eq!(
            classify("add a useCart hook"),
            Some(EditType::AddFeature)
        );
        assert_eq!(classify("the form is broken"), Some(EditType::FixIssue));
        assert_eq!(classify("fix the login bug"), Some(EditType::FixIssue));
        assert_eq!(
            classify("clean up the code please"),
            Some(EditType::Refactor)
        );
        assert_eq!(classify("let's start over"), Some(EditType::FullRebuild));
        assert_eq!(classify("install framer-motion"), Some(EditType::AddDependency));
        assert_eq!(
            classify("add the lodash library"),
            Some(EditType::AddDependency)
        );
        assert_eq!(
            classify("add a charting library"),
            Some(EditType::AddDependency)
        );
        assert_eq!(
            classify("use the zustand library"),
            Some(EditType::AddDependency)
        );
        assert_eq!(classify("hello there"), None);
    }
}
