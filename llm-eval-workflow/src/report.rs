use chrono::{DateTime, Utc};
use llm_eval_core::FailureType;
use llm_eval_metrics::SummaryGroup;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Records that never reached evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkipCounts {
    /// Missing or mistyped fields, or out-of-range values.
    pub schema: usize,
    /// A `task` outside qa / reasoning / summarization.
    pub unknown_task: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.schema + self.unknown_task
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Every item pulled from the source, including skipped ones.
    pub total_records: usize,
    pub evaluated: usize,
    pub skipped: SkipCounts,
    /// Evaluated records whose reference had no tokens; scored as 0.0.
    pub degenerate_references: usize,
    /// Incorrect records the classifier nonetheless labelled `correct`.
    pub classifier_disagreements: usize,
    pub failures_by_type: BTreeMap<FailureType, usize>,
    pub overall_accuracy: Decimal,
    pub groups: Vec<SummaryGroup>,
}

impl PipelineReport {
    pub fn total_failures(&self) -> usize {
        self.failures_by_type.values().sum()
    }
}
