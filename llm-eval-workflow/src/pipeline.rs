use chrono::Utc;
use llm_eval_core::{
    EvaluationResult, EvaluationThresholds, FailureRecord, FailureRow, FailureSink, FailureType,
    Record, Result, SummaryRow, SummarySink,
};
use llm_eval_metrics::{classify_result, evaluate_record, is_degenerate_reference, ResultAggregator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::report::{PipelineReport, SkipCounts};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub thresholds: EvaluationThresholds,
}

/// Single pass over a record source: evaluate, classify, stream rows to the
/// sinks, then aggregate.
#[derive(Debug, Clone)]
pub struct EvaluationPipeline {
    pub id: Uuid,
    config: PipelineConfig,
}

impl EvaluationPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
        }
    }

    /// Like `new`, rejecting out-of-range thresholds.
    pub fn try_new(config: PipelineConfig) -> Result<Self> {
        let thresholds = config.thresholds.validated()?;
        Ok(Self::new(PipelineConfig { thresholds }))
    }

    pub fn thresholds(&self) -> &EvaluationThresholds {
        &self.config.thresholds
    }

    /// Run over `source`. Items that failed to parse upstream arrive as
    /// `Err` and are counted as schema skips, as are records that fail
    /// validation or name an unknown task. Only sink errors abort the run.
    pub fn run<I, S, F>(&self, source: I, summary_sink: &mut S, failure_sink: &mut F) -> Result<PipelineReport>
    where
        I: IntoIterator<Item = Result<Record>>,
        S: SummarySink + ?Sized,
        F: FailureSink + ?Sized,
    {
        let thresholds = self.thresholds();
        let mut total_records = 0;
        let mut skipped = SkipCounts::default();
        let mut degenerate_references = 0;
        let mut classifier_disagreements = 0;
        let mut results: Vec<EvaluationResult> = Vec::new();
        let mut failures: Vec<FailureRecord> = Vec::new();

        tracing::info!(pipeline_id = %self.id, "Starting evaluation pass");

        for item in source {
            total_records += 1;

            let record = match item {
                Ok(record) => record,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, "Skipping unreadable record");
                    skipped.schema += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            // Task recognition precedes field validation: a record with an unknown
            // task is an unknown_task skip even when its other fields are invalid.
            if let Err(e) = record.task_kind() {
                tracing::debug!(id = %record.id, error = %e, "Skipping record with unknown task");
                skipped.unknown_task += 1;
                continue;
            }

            let result = match evaluate_record(record, thresholds) {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid record");
                    skipped.schema += 1;
                    continue;
                }
            };

            if is_degenerate_reference(&result.record.reference) {
                tracing::debug!(id = %result.record.id, "Reference has no tokens; scored as 0.0");
                degenerate_references += 1;
            }

            summary_sink.write_summary(&SummaryRow::from(&result))?;

            match classify_result(&result, thresholds) {
                Some(FailureType::Correct) => {
                    tracing::warn!(
                        id = %result.record.id,
                        task = %result.task,
                        "Classifier labelled an incorrect record as correct"
                    );
                    classifier_disagreements += 1;
                }
                Some(failure_type) => {
                    let failure = FailureRecord::new(&result, failure_type);
                    failure_sink.write_failure(&FailureRow::from(&failure))?;
                    failures.push(failure);
                }
                None => {}
            }

            results.push(result);
        }

        summary_sink.flush()?;
        failure_sink.flush()?;

        let mut failures_by_type = BTreeMap::new();
        for failure in &failures {
            *failures_by_type.entry(failure.failure_type).or_insert(0) += 1;
        }

        let report = PipelineReport {
            run_id: self.id,
            generated_at: Utc::now(),
            total_records,
            evaluated: results.len(),
            skipped,
            degenerate_references,
            classifier_disagreements,
            failures_by_type,
            overall_accuracy: ResultAggregator::overall_accuracy(&results),
            groups: ResultAggregator::aggregate_with_failures(&results, &failures),
        };

        tracing::info!(
            pipeline_id = %self.id,
            evaluated = report.evaluated,
            skipped = report.skipped.total(),
            failures = report.total_failures(),
            "Evaluation pass complete"
        );

        Ok(report)
    }

    /// Run over an in-memory batch, discarding the per-record rows.
    pub fn run_batch(&self, records: Vec<Record>) -> Result<PipelineReport> {
        let mut summaries: Vec<SummaryRow> = Vec::new();
        let mut failures: Vec<FailureRow> = Vec::new();
        self.run(records.into_iter().map(Ok), &mut summaries, &mut failures)
    }
}

impl Default for EvaluationPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
