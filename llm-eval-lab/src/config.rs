use anyhow::{Context, Result};
use config::{Config as ConfigLoader, Environment, File};
use llm_eval_core::EvaluationThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// JSONL produced by the generation stage.
    pub raw_outputs: PathBuf,
    /// Per-record summary CSV.
    pub benchmark_results: PathBuf,
    /// Per-failure CSV.
    pub failure_summary: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_outputs: PathBuf::from("results/raw_outputs.jsonl"),
            benchmark_results: PathBuf::from("results/benchmark_results.csv"),
            failure_summary: PathBuf::from("results/failure_summary.csv"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    #[validate(nested)]
    pub thresholds: EvaluationThresholds,
}

impl Config {
    /// Layered load: `config/default`, `config/local`, an optional explicit
    /// file, then `LLM_EVAL__*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Config = builder
            .add_source(
                Environment::with_prefix("LLM_EVAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        input: Option<PathBuf>,
        summary_out: Option<PathBuf>,
        failures_out: Option<PathBuf>,
    ) {
        if let Some(path) = input {
            self.paths.raw_outputs = path;
        }
        if let Some(path) = summary_out {
            self.paths.benchmark_results = path;
        }
        if let Some(path) = failures_out {
            self.paths.failure_summary = path;
        }
    }
}
