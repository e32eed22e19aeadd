use locator_protocol::{ComponentType, ConfidenceTier, ElementType};
use once_cell::sync::Lazy;
use regex::Regex;

static EXPORTED_DEFINITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^export\s+(?:default\s+)?(?:async\s+)?(?:function|const|class|let)\b")
        .expect("valid exported definition regex")
});

// Tailwind color and typography utilities
static VISUAL_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:bg|text|border|from|via|to|ring|fill|stroke|divide|outline)-(?:[a-z]+-\d{2,3}|white|black|transparent|current)\b|\b(?:text-(?:xs|sm|base|lg|[2-9]?xl)|font-(?:sans|serif|mono|thin|light|normal|medium|semibold|bold|extrabold|black)|leading-\w+|tracking-\w+)\b",
    )
    .expect("valid visual class regex")
});

/// Everything the scorer looks at for one match
#[derive(Debug, Clone, Copy)]
pub struct MatchSignals<'a> {
    pub line: &'a str,
    pub context_after: &'a [String],
    pub component_type: ComponentType,
    pub element_type: Option<ElementType>,
    /// The matched term occurs in the line with its original casing
    pub exact_term: bool,
}

fn raises_to_high(signals: &MatchSignals<'_>) -> bool {
    let line = signals.line.trim();

    if EXPORTED_DEFINITION_RE.is_match(line) {
        return true;
    }

    let styled = signals.element_type == Some(ElementType::Style) || line.contains("className");
    if styled && VISUAL_CLASS_RE.is_match(line) {
        return true;
    }

    if line.contains("return")
        && signals
            .context_after
            .iter()
            .any(|next| next.contains('<') && next.contains('>'))
    {
        return true;
    }

    signals.exact_term
}

/// Three-tier confidence for one match.
///
/// Every match starts at `medium`; rules only ever raise it. Structural
/// signals raise it to `high`, and a page or layout file is always `high`.
pub fn score_match(signals: &MatchSignals<'_>) -> ConfidenceTier {
    let page_or_layout = matches!(
        signals.component_type,
        ComponentType::Page | ComponentType::Layout
    );
    if page_or_layout || raises_to_high(signals) {
        ConfidenceTier::High
    } else {
        ConfidenceTier::Medium
    }
}
