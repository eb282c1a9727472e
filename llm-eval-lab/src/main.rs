use anyhow::{Context, Result};
use clap::Parser;
use llm_eval_workflow::{EvaluationPipeline, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod io;
mod output;

use io::{read_records, CsvFailureSink, CsvSummarySink};
use output::{OutputFormat, OutputWriter};

/// Evaluate model outputs against references and classify the failures.
#[derive(Debug, Parser)]
#[command(name = "llm-eval", version, about)]
struct Cli {
    /// Extra configuration file layered over config/default and config/local
    #[arg(short, long, env = "LLM_EVAL_CONFIG")]
    config: Option<PathBuf>,

    /// JSONL file of generated outputs
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Per-record summary CSV
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Per-failure CSV
    #[arg(long)]
    failures_out: Option<PathBuf>,

    /// Console report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "llm_eval_lab=info,llm_eval_workflow=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn write_file(path: &Path, contents: Vec<u8>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {:?}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = config::Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.input, cli.summary_out, cli.failures_out);
    tracing::info!(input = ?config.paths.raw_outputs, "Configuration loaded");

    let contents = tokio::fs::read(&config.paths.raw_outputs)
        .await
        .with_context(|| format!("Failed to read {:?}", config.paths.raw_outputs))?;

    let pipeline = EvaluationPipeline::try_new(PipelineConfig {
        thresholds: config.thresholds.clone(),
    })?;

    let mut summary_sink = CsvSummarySink::new(Vec::new())?;
    let mut failure_sink = CsvFailureSink::new(Vec::new())?;
    let report = pipeline.run(read_records(&contents), &mut summary_sink, &mut failure_sink)?;

    write_file(&config.paths.benchmark_results, summary_sink.into_inner()?).await?;
    write_file(&config.paths.failure_summary, failure_sink.into_inner()?).await?;
    tracing::info!(
        summary = ?config.paths.benchmark_results,
        failures = ?config.paths.failure_summary,
        "Results written"
    );

    OutputWriter::new(cli.format, cli.no_color).write_report(&report)?;

    Ok(())
}
