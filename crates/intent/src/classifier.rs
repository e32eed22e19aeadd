use crate::patterns::match_group;
use locator_protocol::path_filters::basename;
use locator_protocol::{EditIntent, EditType, ProjectManifest};
use regex::Regex;

// Scores are kept in tenths so the sums stay exact.
const BASE_CONFIDENCE: u8 = 5;
const FALLBACK_CONFIDENCE: f64 = 0.3;
const RESOLVED_FILES_BONUS: u8 = 2;
const LONG_PROMPT_BONUS: u8 = 1;
const LONG_PROMPT_WORDS: usize = 5;
const VERIFIED_PATTERN_BONUS: u8 = 2;
const MAX_CONFIDENCE: u8 = 10;

pub struct IntentClassifier;

impl IntentClassifier {
    /// Classify a free-text edit request against the current project.
    ///
    /// Total: every prompt yields an intent with at least one target file.
    #[must_use]
    pub fn classify(prompt: &str, manifest: &ProjectManifest) -> EditIntent {
        let Some((group, pattern)) = match_group(prompt) else {
            log::debug!("No intent pattern matched; using general update fallback");
            return Self::fallback(manifest);
        };

        let resolved = (group.resolver)(prompt, manifest);
        let confidence = Self::confidence(prompt, pattern, &resolved);
        let target_files = if resolved.is_empty() {
            vec![manifest.entry_point.clone()]
        } else {
            resolved
        };

        log::debug!(
            "Classified as {} via /{}/ -> {:?} (confidence {confidence:.2})",
            group.edit_type,
            pattern.as_str(),
            target_files
        );

        let suggested_context = manifest
            .paths()
            .filter(|path| !target_files.iter().any(|target| target.as_str() == *path))
            .map(str::to_string)
            .collect();

        EditIntent {
            edit_type: group.edit_type,
            description: Self::describe(group.edit_type, prompt, &target_files),
            target_files,
            confidence,
            suggested_context,
        }
    }

    fn fallback(manifest: &ProjectManifest) -> EditIntent {
        EditIntent {
            edit_type: EditType::UpdateComponent,
            target_files: vec![manifest.entry_point.clone()],
            confidence: FALLBACK_CONFIDENCE,
            description: "General update to application".to_string(),
            suggested_context: Vec::new(),
        }
    }

    fn confidence(prompt: &str, pattern: &Regex, resolved: &[String]) -> f64 {
        let mut tenths = BASE_CONFIDENCE;
        if resolved.iter().any(|path| !path.is_empty()) {
            tenths += RESOLVED_FILES_BONUS;
        }
        if prompt.split_whitespace().count() > LONG_PROMPT_WORDS {
            tenths += LONG_PROMPT_BONUS;
        }
        if pattern.is_match(prompt.trim()) {
            tenths += VERIFIED_PATTERN_BONUS;
        }
        f64::from(tenths.min(MAX_CONFIDENCE)) / 10.0
    }

    fn describe(edit_type: EditType, prompt: &str, target_files: &[String]) -> String {
        let file_names = target_files
            .iter()
            .map(|path| basename(path))
            .collect::<Vec<_>>()
            .join(", ");

        match edit_type {
            EditType::UpdateComponent => format!("Update {file_names}: {prompt}"),
            EditType::AddFeature => format!("Add new feature: {prompt}"),
            EditType::FixIssue => format!("Fix issue in {file_names}: {prompt}"),
            EditType::UpdateStyle => format!("Update styles in {file_names}: {prompt}"),
            EditType::Refactor => format!("Refactor {file_names}: {prompt}"),
            EditType::FullRebuild => "Rebuild the entire application".to_string(),
            EditType::AddDependency => format!("Add dependency: {prompt}"),
        }
    }
}

/// Classify `prompt` against `manifest`; see [`IntentClassifier::classify`]
#[must_use]
pub fn classify_intent(prompt: &str, manifest: &ProjectManifest) -> EditIntent {
    IntentClassifier::classify(prompt, manifest)
}
