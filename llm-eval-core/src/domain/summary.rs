use serde::{Deserialize, Serialize};

use super::evaluation::{EvaluationResult, FailureRecord, FailureType};
use super::record::TaskKind;

/// Per-record row handed to a [`SummarySink`](crate::SummarySink).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    pub model: String,
    pub task: TaskKind,
    pub id: String,
    pub latency_sec: f64,
    pub output_tokens: u64,
    pub correct: bool,
}

impl From<&EvaluationResult> for SummaryRow {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            model: result.record.model.clone(),
            task: result.task,
            id: result.record.id.clone(),
            latency_sec: result.record.latency_sec,
            output_tokens: result.record.output_tokens,
            correct: result.correct,
        }
    }
}

/// Per-failure row handed to a [`FailureSink`](crate::FailureSink).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailureRow {
    pub model: String,
    pub task: TaskKind,
    pub id: String,
    pub failure_type: FailureType,
    pub output: String,
    pub reference: String,
}

impl From<&FailureRecord> for FailureRow {
    fn from(failure: &FailureRecord) -> Self {
        Self {
            model: failure.record.model.clone(),
            task: failure.task,
            id: failure.record.id.clone(),
            failure_type: failure.failure_type,
            output: failure.record.output.clone(),
            reference: failure.record.reference.clone(),
        }
    }
}
