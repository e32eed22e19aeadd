use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use command::CommandRequest;
use locator_indexer::{ManifestBuilder, ManifestStats};
use locator_intent::classify_intent;
use locator_protocol::schema::{json_schema, SchemaKind};
use locator_protocol::{
    serialize_json, serialize_json_pretty, EditIntent, FallbackSearch, ProjectManifest,
    SearchPlan,
};
use locator_search::{format_results_for_prompt, SearchEngine, SearchSettings};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod command;
mod pipeline;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    print_stdout(&serialize_json_pretty(value)?)
}

#[derive(Parser)]
#[command(name = "edit-locator")]
#[command(
    about = "Find where a natural-language edit request lands in a React project",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,

    /// Search settings file (TOML or JSON)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project manifest for a directory
    Manifest(ManifestArgs),

    /// Classify an edit request against a project
    Classify(ClassifyArgs),

    /// Run a search plan over a project's files
    Search(SearchArgs),

    /// Classify, search and pick the edit location for a request
    Locate(LocateArgs),

    /// Print the JSON schema of a wire type
    Schema(SchemaArgs),

    /// Execute a JSON Command API request
    Command(CommandArgs),
}

#[derive(Args)]
struct ManifestArgs {
    /// Project root
    path: PathBuf,

    /// Print the full manifest as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Project root
    path: PathBuf,

    /// Edit request, e.g. "make the header blue"
    prompt: String,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Project root
    path: PathBuf,

    /// Literal search term (case-insensitive)
    #[arg(long = "term", short = 't')]
    terms: Vec<String>,

    /// Regex pattern (case-insensitive)
    #[arg(long = "pattern", short = 'p')]
    patterns: Vec<String>,

    /// File searched first (path substring or glob)
    #[arg(long = "priority")]
    priority: Vec<String>,

    /// File skipped (path substring or glob)
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Extension to search, e.g. .jsx (default: .jsx .tsx .js .ts)
    #[arg(long = "file-type")]
    file_types: Vec<String>,

    /// Term tried when the primary terms find nothing
    #[arg(long = "fallback-term")]
    fallback_terms: Vec<String>,

    /// Pattern tried when the primary terms find nothing
    #[arg(long = "fallback-pattern")]
    fallback_patterns: Vec<String>,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LocateArgs {
    /// Project root
    path: PathBuf,

    /// Edit request
    prompt: String,

    /// Results rendered in the report
    #[arg(long, default_value_t = 5)]
    max_results: usize,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SchemaArgs {
    /// manifest | plan | result
    kind: SchemaKind,
}

#[derive(Args)]
struct CommandArgs {
    /// Inline JSON payload (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to file containing JSON payload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let engine = SearchEngine::new(load_settings(cli.settings.as_deref())?);

    match cli.command {
        Commands::Manifest(args) => run_manifest(args)?,
        Commands::Classify(args) => run_classify(args)?,
        Commands::Search(args) => run_search(args, &engine)?,
        Commands::Locate(args) => run_locate(args, &engine)?,
        Commands::Schema(args) => print_json(&json_schema(args.kind)?)?,
        Commands::Command(args) => run_command(args, engine)?,
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<SearchSettings> {
    let Some(path) = path else {
        return Ok(SearchSettings::default());
    };
    SearchSettings::from_file(path)
        .with_context(|| format!("Failed to load settings file {}", path.display()))
}

fn build_manifest(path: &Path) -> Result<(ProjectManifest, ManifestStats)> {
    ManifestBuilder::new(path)
        .build_with_stats()
        .with_context(|| format!("Failed to index {}", path.display()))
}

fn run_manifest(args: ManifestArgs) -> Result<()> {
    let (manifest, stats) = build_manifest(&args.path)?;
    if args.json {
        return print_json(&manifest);
    }
    print_stdout(&render_manifest(&manifest, &stats))
}

fn render_manifest(manifest: &ProjectManifest, stats: &ManifestStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Entry point: {}\n", manifest.entry_point));
    let by_type: Vec<String> = stats
        .file_types
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect();
    out.push_str(&format!("Files: {} ({})\n", stats.files, by_type.join(", ")));
    out.push_str(&format!("Components: {}\n", stats.components));
    if !manifest.style_files.is_empty() {
        let styles: Vec<&str> = manifest.style_files.iter().map(String::as_str).collect();
        out.push_str(&format!("Style files: {}\n", styles.join(", ")));
    }
    for route in &manifest.routes {
        out.push_str(&format!("Route: {} -> {}\n", route.path, route.component));
    }
    for error in &stats.errors {
        out.push_str(&format!("Unreadable: {error}\n"));
    }
    out.push_str(&format!("Built in {} ms", stats.time_ms));
    out
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let (manifest, _) = build_manifest(&args.path)?;
    let intent = classify_intent(&args.prompt, &manifest);
    if args.json {
        return print_json(&intent);
    }
    print_stdout(&render_intent(&intent))
}

fn render_intent(intent: &EditIntent) -> String {
    let mut out = String::new();
    out.push_str(&format!("Type: {}\n", intent.edit_type));
    out.push_str(&format!("Confidence: {:.1}\n", intent.confidence));
    out.push_str(&format!("Description: {}\n", intent.description));
    out.push_str("Target files:");
    for file in &intent.target_files {
        out.push_str(&format!("\n  {file}"));
    }
    out
}

fn run_search(args: SearchArgs, engine: &SearchEngine) -> Result<()> {
    let mut plan = SearchPlan::for_terms(args.terms)
        .patterns(args.patterns)
        .priority_files(args.priority)
        .exclude_files(args.exclude);
    if !args.file_types.is_empty() {
        plan = plan.file_types(args.file_types);
    }
    if !args.fallback_terms.is_empty() || !args.fallback_patterns.is_empty() {
        plan = plan.fallback(FallbackSearch {
            terms: args.fallback_terms,
            patterns: args.fallback_patterns,
        });
    }

    let (manifest, _) = build_manifest(&args.path)?;
    let result = engine.execute(&plan, &manifest.contents());
    if args.json {
        return print_json(&result);
    }

    let mut out = format!(
        "{} search over {} files in {} ms\n",
        result.search_type.as_str(),
        result.files_searched,
        result.execution_time_ms
    );
    match &result.error {
        Some(error) => out.push_str(error),
        None => out.push_str(&format_results_for_prompt(
            &result.results,
            result.results.len(),
        )),
    }
    print_stdout(out.trim_end())
}

fn run_locate(args: LocateArgs, engine: &SearchEngine) -> Result<()> {
    let (manifest, _) = build_manifest(&args.path)?;
    let output = pipeline::locate(&args.prompt, &manifest, engine, args.max_results);
    if args.json {
        return print_json(&output);
    }
    print_stdout(pipeline::render_locate(&output).trim_end())
}

fn run_command(args: CommandArgs, engine: SearchEngine) -> Result<()> {
    let raw = read_payload(&args)?;
    let request: CommandRequest =
        serde_json::from_str(&raw).context("Invalid JSON passed to --json/--file")?;
    log::debug!("Command request for action {}", request.action.as_str());

    let response = command::execute(request, engine);

    let output = if args.pretty {
        serialize_json_pretty(&response)?
    } else {
        serialize_json(&response)?
    };
    print_stdout(&output)?;

    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

fn read_payload(args: &CommandArgs) -> Result<String> {
    if let Some(raw) = &args.json {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read JSON from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Command request is empty. Provide --json, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}
