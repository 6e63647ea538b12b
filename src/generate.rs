//! Generation run orchestration.
//!
//! Takes a validated [`GenerateConfig`] through schema loading, compilation
//! and output, either to the console or to files (sequentially or on
//! parallel workers).

use crate::config::GenerateConfig;
use crate::schema_source::load_raw_schema;
use anyhow::Context;
use forge_core::{GenerationPlan, RawSchema};
use forge_distributed::{
    describe_partitioning, generate_files_parallel, partition_files, should_parallelize,
};
use forge_generator::RecordGenerator;
use forge_populate_jsonl::{
    clear_directory, write_jsonl, FileOutput, JsonlPopulator, PopulateMetrics,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Longest schema text shown in the configuration log.
pub const SCHEMA_PREVIEW_LEN: usize = 100;

/// Number of created files listed by name in the summary.
pub const SUMMARY_FILE_LIST_LEN: usize = 5;

const RULE: &str = "------------------------------------------------------------";

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// Created files, sorted by index (empty in console mode)
    pub files: Vec<PathBuf>,
    /// Records written across all outputs
    pub total_lines: u64,
    pub metrics: PopulateMetrics,
}

/// Load and compile the configured schema.
pub fn compile_plan(config: &GenerateConfig) -> anyhow::Result<(RawSchema, GenerationPlan)> {
    let raw = load_raw_schema(&config.data_schema)?;
    let plan = GenerationPlan::compile(&raw).context("Failed to compile data schema")?;
    info!("Schema parsed: {} field(s) defined", plan.len());
    Ok((raw, plan))
}

/// Run a full generation: compile, log the configuration, produce output.
pub async fn execute(config: &GenerateConfig) -> anyhow::Result<GenerateSummary> {
    let (raw, plan) = compile_plan(config)?;
    log_configuration(config, &raw);

    info!("Starting data generation...");
    let summary = if config.is_console_mode() {
        info!("Mode: Console output");
        info!("Generating {} line(s)...", config.data_lines);
        generate_console(config, plan)?
    } else {
        info!("Mode: File output ({} file(s))", config.files_count);
        generate_files(config, plan).await?
    };

    log_summary(config, &summary);
    Ok(summary)
}

/// Write `data_lines` records to stdout.
pub fn generate_console(
    config: &GenerateConfig,
    plan: GenerationPlan,
) -> anyhow::Result<GenerateSummary> {
    let stdout = std::io::stdout();
    generate_to_writer(stdout.lock(), config, plan)
        .context("Failed to write records to console")
}

/// Write `data_lines` records to `writer` as JSON Lines.
pub fn generate_to_writer<W: Write>(
    writer: W,
    config: &GenerateConfig,
    plan: GenerationPlan,
) -> anyhow::Result<GenerateSummary> {
    let start = Instant::now();
    let mut generator = make_generator(plan, config.seed);

    let written = write_jsonl(writer, generator.records(config.data_lines))
        .context("Failed to write records")?;
    debug!("Wrote {written} line(s)");

    Ok(GenerateSummary {
        files: Vec::new(),
        total_lines: written,
        metrics: PopulateMetrics {
            rows_written: written,
            total_duration: start.elapsed(),
            ..Default::default()
        },
    })
}

/// Write `files_count` files into the output directory.
pub async fn generate_files(
    config: &GenerateConfig,
    plan: GenerationPlan,
) -> anyhow::Result<GenerateSummary> {
    info!("Lines per file: {}", config.data_lines);
    info!("Output directory: {}", config.path.display());
    info!("File prefix type: {}", config.file_prefix);

    if config.clear_path {
        info!("Clearing existing JSON files from output directory...");
        let removed = clear_directory(&config.path)
            .with_context(|| format!("Failed to clear {}", config.path.display()))?;
        if removed > 0 {
            info!("Removed {removed} existing file(s)");
        }
    }

    let outputs = if should_parallelize(config.files_count, config.multiprocessing) {
        info!(
            "Creating files using {} parallel worker(s)...",
            config.multiprocessing
        );
        let assignments = partition_files(config.files_count, config.multiprocessing, config.seed);
        debug!("{}", describe_partitioning(&assignments));

        generate_files_parallel(
            &plan,
            &assignments,
            &config.path,
            &config.output_settings(),
            config.data_lines,
        )
        .await
        .context("Parallel file generation failed")?
    } else {
        info!("Creating files (single worker mode)...");
        generate_files_sequential(config, plan).await?
    };

    let mut metrics = PopulateMetrics::default();
    for output in &outputs {
        metrics.accumulate(&output.metrics);
    }

    Ok(GenerateSummary {
        total_lines: metrics.rows_written,
        files: outputs.into_iter().map(|output| output.path).collect(),
        metrics,
    })
}

async fn generate_files_sequential(
    config: &GenerateConfig,
    plan: GenerationPlan,
) -> anyhow::Result<Vec<FileOutput>> {
    let dir = config.path.clone();
    let settings = config.output_settings();
    let files_count = config.files_count;
    let data_lines = config.data_lines;
    let seed = config.seed;

    tokio::task::spawn_blocking(move || {
        let mut populator = match seed {
            Some(seed) => JsonlPopulator::with_seed(plan, settings, seed),
            None => JsonlPopulator::new(plan, settings),
        };
        populator.populate_files(&dir, 1, files_count, data_lines)
    })
    .await
    .context("File generation task did not complete")?
    .context("File generation failed")
}

fn make_generator(plan: GenerationPlan, seed: Option<u64>) -> RecordGenerator {
    match seed {
        Some(seed) => RecordGenerator::with_seed(plan, seed),
        None => RecordGenerator::new(plan),
    }
}

/// Shorten schema text for logging.
pub fn schema_preview(schema: &str, max_chars: usize) -> String {
    match schema.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &schema[..cut]),
        None => schema.to_string(),
    }
}

/// Log the effective configuration.
pub fn log_configuration(config: &GenerateConfig, raw: &RawSchema) {
    info!("Current configuration:");
    info!("  Path to save files: {}", config.path.display());
    info!("  Files count: {}", config.files_count);
    info!("  File name: {}", config.file_name);
    info!("  File prefix: {}", config.file_prefix);
    info!("  Data lines per file: {}", config.data_lines);
    info!("  Multiprocessing: {} worker(s)", config.multiprocessing);
    info!("  Clear path: {}", config.clear_path);
    match config.seed {
        Some(seed) => info!("  Seed: {seed}"),
        None => info!("  Seed: (entropy)"),
    }
    info!(
        "  Data schema: {}",
        schema_preview(&raw.to_json_string(), SCHEMA_PREVIEW_LEN)
    );
}

/// Log what a run produced.
pub fn log_summary(config: &GenerateConfig, summary: &GenerateSummary) {
    info!("{RULE}");

    if config.is_console_mode() {
        info!("Total lines generated: {}", summary.total_lines);
    } else {
        info!("Successfully created {} file(s):", summary.files.len());
        for (i, path) in summary.files.iter().take(SUMMARY_FILE_LIST_LEN).enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            info!("  {}. {}", i + 1, name);
        }
        if summary.files.len() > SUMMARY_FILE_LIST_LEN {
            info!(
                "  ... and {} more file(s)",
                summary.files.len() - SUMMARY_FILE_LIST_LEN
            );
        }
        info!("{RULE}");
        info!(
            "Total data lines written: {} ({} bytes, {:.2} rows/sec)",
            summary.total_lines,
            summary.metrics.file_size_bytes,
            summary.metrics.rows_per_second()
        );
    }
}
