use crate::command::domain::{
    parse_payload, ClassifyPayload, CommandAction, CommandOutcome, LocatePayload,
    ManifestPayload, ProjectSource, SearchPayload, SelectPayload,
};
use crate::pipeline;
use anyhow::{bail, Result};
use locator_indexer::ManifestBuilder;
use locator_intent::classify_intent;
use locator_protocol::ProjectManifest;
use locator_search::{select_target_file, SearchEngine};
use serde_json::{json, Value};
use std::path::Path;

pub struct Services {
    engine: SearchEngine,
}

impl Services {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    pub fn route(&self, action: CommandAction, payload: Value) -> Result<CommandOutcome> {
        match action {
            CommandAction::Manifest => self.manifest(payload),
            CommandAction::Classify => self.classify(payload),
            CommandAction::Search => self.search(payload),
            CommandAction::Select => self.select(payload),
            CommandAction::Locate => self.locate(payload),
        }
    }

    fn manifest(&self, payload: Value) -> Result<CommandOutcome> {
        let payload: ManifestPayload = parse_payload(payload)?;
        let root = payload.path.unwrap_or_else(|| Path::new(".").to_path_buf());
        let (manifest, stats) = ManifestBuilder::new(&root).build_with_stats()?;
        let files = manifest.files.len();
        Ok(CommandOutcome::from_value(json!({
            "manifest": manifest,
            "stats": stats,
        }))?
        .with_files(files))
    }

    fn classify(&self, payload: Value) -> Result<CommandOutcome> {
        let payload: ClassifyPayload = parse_payload(payload)?;
        let manifest = load_project(payload.project)?;
        let intent = classify_intent(&payload.prompt, &manifest);
        Ok(CommandOutcome::from_value(intent)?.with_files(manifest.files.len()))
    }

    fn search(&self, payload: Value) -> Result<CommandOutcome> {
        let payload: SearchPayload = parse_payload(payload)?;
        let files = match payload.files {
            Some(files) => files,
            None => load_project(payload.project)?.contents(),
        };
        let result = self.engine.execute(&payload.plan, &files);
        Ok(CommandOutcome::from_value(result)?.with_files(files.len()))
    }

    fn select(&self, payload: Value) -> Result<CommandOutcome> {
        let payload: SelectPayload = parse_payload(payload)?;
        let target = select_target_file(&payload.results, &payload.edit_type);
        CommandOutcome::from_value(json!({ "target": target }))
    }

    fn locate(&self, payload: Value) -> Result<CommandOutcome> {
        let payload: LocatePayload = parse_payload(payload)?;
        let manifest = load_project(payload.project)?;
        let output = pipeline::locate(
            &payload.prompt,
            &manifest,
            &self.engine,
            payload.max_results,
        );
        Ok(CommandOutcome::from_value(output)?.with_files(manifest.files.len()))
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(SearchEngine::default())
    }
}

/// Inline manifest wins over a project path
pub fn load_project(source: ProjectSource) -> Result<ProjectManifest> {
    if let Some(manifest) = source.manifest {
        return Ok(manifest);
    }
    let Some(path) = source.path else {
        bail!("No project given: set `path` or `manifest`");
    };
    Ok(ManifestBuilder::new(path).build()?)
}
