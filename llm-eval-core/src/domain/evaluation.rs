use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::{Record, TaskKind};

// ===== Failure Taxonomy =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    Correct,
    OverVerboseCorrect,
    PartialAnswer,
    Hallucination,
    WrongEntity,
    OverconfidentWrong,
    UnverifiableReasoning,
    InvalidLogicalInference,
    HallucinatedDetail,
    MissingKeyInfo,
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::Correct => "correct",
            FailureType::OverVerboseCorrect => "over_verbose_correct",
            FailureType::PartialAnswer => "partial_answer",
            FailureType::Hallucination => "hallucination",
            FailureType::WrongEntity => "wrong_entity",
            FailureType::OverconfidentWrong => "overconfident_wrong",
            FailureType::UnverifiableReasoning => "unverifiable_reasoning",
            FailureType::InvalidLogicalInference => "invalid_logical_inference",
            FailureType::HallucinatedDetail => "hallucinated_detail",
            FailureType::MissingKeyInfo => "missing_key_info",
        }
    }

    /// Whether a record carrying this label belongs in the failure output.
    pub fn is_failure(&self) -> bool {
        !matches!(self, FailureType::Correct)
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Derived Records =====

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvaluationResult {
    #[serde(flatten)]
    pub record: Record,
    #[serde(skip)]
    pub task: TaskKind,
    pub correct: bool,
}

impl EvaluationResult {
    pub fn new(record: Record, task: TaskKind, correct: bool) -> Self {
        Self { record, task, correct }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FailureRecord {
    #[serde(flatten)]
    pub record: Record,
    #[serde(skip)]
    pub task: TaskKind,
    pub failure_type: FailureType,
}

impl FailureRecord {
    pub fn new(result: &EvaluationResult, failure_type: FailureType) -> Self {
        Self {
            record: result.record.clone(),
            task: result.task,
            failure_type,
        }
    }
}
