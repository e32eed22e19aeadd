use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

const MIN_QUOTED_LEN: usize = 2;
const MIN_COMPONENT_TOKEN_LEN: usize = 3;

/// Words stripped before looking for component names
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "to", "from", "update", "change", "modify", "edit", "fix",
    "make",
];

/// Verbs and connectives that never name a component or a visible string
const ACTION_WORDS: &[&str] = &[
    "add", "and", "build", "create", "delete", "hide", "implement", "include", "install",
    "new", "please", "refactor", "remove", "replace", "style", "with",
];

static STOPWORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = STOPWORDS.join("|");
    RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
        .expect("valid stopword regex")
});

// Case-sensitive on purpose: picks `Hero`, `hero`, `heroBanner`, `HeroBanner`.
static COMPONENT_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]?[a-z]+(?:[A-Z][a-z]+)*\b").expect("valid component token regex")
});

static ACTION_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"\b(?:remove|delete|hide)\s+(?:the\s+)?(.+?)(?:\s+button|\s+link|\s+text|\s+element|\s+section|$)",
    )
    .case_insensitive(true)
    .build()
    .expect("valid action phrase regex")
});

static REPLACE_SUBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\breplace\s+(?:the\s+)?(.+?)\s+with\b")
        .case_insensitive(true)
        .build()
        .expect("valid replace subject regex")
});

fn strip_quotes(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|ch: char| matches!(ch, '"' | '\'' | '`'))
        .trim()
}

/// Substrings wrapped in double quotes, single quotes or backticks
pub fn extract_quoted(prompt: &str) -> Vec<String> {
    fn extract_for_quote(prompt: &str, quote: char) -> Vec<String> {
        let mut out = Vec::new();
        let mut start: Option<usize> = None;
        for (idx, ch) in prompt.char_indices() {
            if ch != quote {
                continue;
            }
            match start {
                None => start = Some(idx + ch.len_utf8()),
                Some(s) => {
                    if idx > s {
                        out.push(prompt[s..idx].to_string());
                    }
                    start = None;
                }
            }
        }
        out
    }

    let mut out = Vec::new();
    out.extend(extract_for_quote(prompt, '"'));
    out.extend(extract_for_quote(prompt, '\''));
    out.extend(extract_for_quote(prompt, '`'));
    out.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| s.len() >= MIN_QUOTED_LEN)
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .collect()
}

/// The phrase after `remove|delete|hide`, up to a trailing element keyword
pub fn extract_action_phrase(prompt: &str) -> Option<String> {
    let captures = ACTION_PHRASE_RE.captures(prompt)?;
    let phrase = strip_quotes(captures.get(1)?.as_str());
    (!phrase.is_empty()).then(|| phrase.to_string())
}

/// The subject of `replace X with Y`
pub fn extract_replace_subject(prompt: &str) -> Option<String> {
    let captures = REPLACE_SUBJECT_RE.captures(prompt)?;
    let subject = strip_quotes(captures.get(1)?.as_str());
    (!subject.is_empty()).then(|| subject.to_string())
}

/// Lowercased candidate component-name tokens, stopwords removed
pub fn extract_component_names(prompt: &str) -> Vec<String> {
    let cleaned = STOPWORD_RE.replace_all(prompt, "");

    let mut words: Vec<String> = Vec::new();
    for found in COMPONENT_TOKEN_RE.find_iter(&cleaned) {
        let word = found.as_str().to_lowercase();
        if word.len() >= MIN_COMPONENT_TOKEN_LEN && !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

pub(crate) fn is_action_word(token: &str) -> bool {
    let token = token.trim().to_ascii_lowercase();
    ACTION_WORDS.iter().any(|w| *w == token)
}
