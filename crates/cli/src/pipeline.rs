//! Prompt to edit location: classify, plan, search, select.

use crate::command::domain::LocateOutput;
use locator_intent::{build_search_plan, classify_intent};
use locator_protocol::ProjectManifest;
use locator_search::{format_results_for_prompt, select_target_file, SearchEngine};

pub fn locate(
    prompt: &str,
    manifest: &ProjectManifest,
    engine: &SearchEngine,
    max_results: usize,
) -> LocateOutput {
    let intent = classify_intent(prompt, manifest);
    let plan = build_search_plan(prompt, &intent);
    let search = engine.execute(&plan, &manifest.contents());
    let target = select_target_file(&search.results, intent.edit_type.as_str());
    let context = format_results_for_prompt(&search.results, max_results);

    log::debug!(
        "Located {:?} for {} ({} results, {:?} search)",
        target.as_ref().map(|t| t.file_path.as_str()),
        intent.edit_type,
        search.results.len(),
        search.search_type
    );

    LocateOutput {
        intent,
        plan,
        search,
        target,
        context,
    }
}

/// Human-readable report for the `locate` subcommand
pub fn render_locate(output: &LocateOutput) -> String {
    let mut out = String::new();
    let intent = &output.intent;
    out.push_str(&format!(
        "Intent: {} (confidence {:.1})\n",
        intent.edit_type, intent.confidence
    ));
    out.push_str(&format!("Files: {}\n", intent.target_files.join(", ")));
    match &output.target {
        Some(target) => out.push_str(&format!(
            "Target: {}:{} ({})\n",
            target.file_path, target.line_number, target.reason
        )),
        None => {
            let reason = output.search.error.as_deref().unwrap_or("no results");
            out.push_str(&format!("Target: none ({reason})\n"));
        }
    }
    out.push('\n');
    out.push_str(&output.context);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use locator_protocol::{EditType, FileRecord, FileType};

    fn landing_page() -> ProjectManifest {
        ProjectManifest::new("src/App.jsx")
            .with_file(
                "src/App.jsx",
                FileRecord::new(
                    "import Hero from './components/Hero'\n\nexport default function App() {\n  return <Hero />\n}\n",
                    FileType::Component,
                ),
            )
            .with_file(
                "src/components/Hero.jsx",
                FileRecord::new(
                    "export default function Hero() {\n  return (\n    <section>\n      <h1>Ship faster</h1>\n      <button className=\"bg-indigo-600\">Start Deploying</button>\n    </section>\n  )\n}\n",
                    FileType::Component,
                ),
            )
    }

    #[test]
    fn removal_prompt_lands_on_the_button_line() {
        let output = locate(
            "remove start deploying button",
            &landing_page(),
            &SearchEngine::default(),
            5,
        );

        assert_eq!(output.intent.edit_type, EditType::UpdateComponent);
        assert!(output.search.success);
        let target = output.target.expect("target");
        assert_eq!(target.file_path, "src/components/Hero.jsx");
        assert_eq!(target.line_number, 5);
        assert!(output.context.contains("src/components/Hero.jsx:5"));
    }

    #[test]
    fn report_names_missing_target() {
        let output = locate(
            "rename \"pricing table\"",
            &landing_page(),
            &SearchEngine::default(),
            5,
        );
        assert!(output.target.is_none());
        let report = render_locate(&output);
        assert!(report.contains("Target: none (No matches found"));
        assert!(report.contains("No matching code locations found."));
    }
}
