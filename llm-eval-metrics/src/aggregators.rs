use llm_eval_core::{EvaluationResult, FailureRecord, FailureType, TaskKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calculators::LatencyMetrics;

/// Statistics for one `(model, task)` group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryGroup {
    pub model: String,
    pub task: TaskKind,
    pub count: usize,
    pub correct: usize,
    /// `correct / count`, exact
    pub accuracy: Decimal,
    pub mean_latency_sec: f64,
    pub mean_output_tokens: f64,
    pub latency: LatencyMetrics,
    pub failure_counts: BTreeMap<FailureType, usize>,
}

impl SummaryGroup {
    pub fn accuracy_f64(&self) -> f64 {
        self.accuracy.to_f64().unwrap_or(0.0)
    }

    pub fn failure_total(&self) -> usize {
        self.failure_counts.values().sum()
    }

    fn from_results(model: String, task: TaskKind, results: &[&EvaluationResult]) -> Self {
        let count = results.len();
        let correct = results.iter().filter(|r| r.correct).count();

        let latencies: Vec<f64> = results.iter().map(|r| r.record.latency_sec).collect();
        let tokens: Vec<u64> = results.iter().map(|r| r.record.output_tokens).collect();
        let latency = LatencyMetrics::from_measurements(&latencies, &tokens);

        let (accuracy, mean_output_tokens) = if count > 0 {
            (
                Decimal::from(correct as u64) / Decimal::from(count as u64),
                latency.total_tokens as f64 / count as f64,
            )
        } else {
            (Decimal::ZERO, 0.0)
        };

        Self {
            model,
            task,
            count,
            correct,
            accuracy,
            mean_latency_sec: latency.mean,
            mean_output_tokens,
            latency,
            failure_counts: BTreeMap::new(),
        }
    }
}

pub struct ResultAggregator;

impl ResultAggregator {
    /// Group results by exact `(model, task)` and summarize each group.
    /// Groups come back ordered by key.
    pub fn aggregate(results: &[EvaluationResult]) -> Vec<SummaryGroup> {
        let mut grouped: BTreeMap<(&str, TaskKind), Vec<&EvaluationResult>> = BTreeMap::new();
        for result in results {
            grouped
                .entry((result.record.model.as_str(), result.task))
                .or_default()
                .push(result);
        }

        let groups: Vec<SummaryGroup> = grouped
            .into_iter()
            .map(|((model, task), members)| SummaryGroup::from_results(model.to_string(), task, &members))
            .collect();

        tracing::debug!(results = results.len(), groups = groups.len(), "Aggregated results");
        groups
    }

    /// Like [`aggregate`](Self::aggregate), with per-group failure-type
    /// counts filled in. Failures whose group has no results are ignored.
    pub fn aggregate_with_failures(
        results: &[EvaluationResult],
        failures: &[FailureRecord],
    ) -> Vec<SummaryGroup> {
        let mut groups = Self::aggregate(results);

        for failure in failures {
            if let Some(group) = groups
                .iter_mut()
                .find(|g| g.model == failure.record.model && g.task == failure.task)
            {
                *group.failure_counts.entry(failure.failure_type).or_insert(0) += 1;
            }
        }

        groups
    }

    /// Accuracy across every result regardless of group.
    pub fn overall_accuracy(results: &[EvaluationResult]) -> Decimal {
        if results.is_empty() {
            return Decimal::ZERO;
        }
        let correct = results.iter().filter(|r| r.correct).count();
        Decimal::from(correct as u64) / Decimal::from(results.len() as u64)
    }
}
