use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::{CoreError, Result};

// ===== Task Kind =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Qa,
    Reasoning,
    Summarization,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Qa, TaskKind::Reasoning, TaskKind::Summarization];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Qa => "qa",
            TaskKind::Reasoning => "reasoning",
            TaskKind::Summarization => "summarization",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = CoreError;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "qa" => Ok(TaskKind::Qa),
            "reasoning" => Ok(TaskKind::Reasoning),
            "summarization" => Ok(TaskKind::Summarization),
            other => Err(CoreError::Schema(format!("unrecognized task '{}'", other))),
        }
    }
}

// ===== Record =====

/// One model-generated response as produced by the generation stage.
///
/// `task` is kept as the raw wire string so that records naming an unknown
/// task still deserialize and can be counted as skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Record {
    #[validate(length(min = 1))]
    pub model: String,
    pub task: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub input: String,
    pub reference: String,
    pub output: String,
    #[validate(range(min = 0.0))]
    pub latency_sec: f64,
    /// Whitespace-token count of `output`.
    pub output_tokens: u64,
}

impl Record {
    pub fn new(
        model: impl Into<String>,
        task: impl Into<String>,
        id: impl Into<String>,
        input: impl Into<String>,
        reference: impl Into<String>,
        output: impl Into<String>,
        latency_sec: f64,
    ) -> Self {
        let output = output.into();
        let output_tokens = output.split_whitespace().count() as u64;
        Self {
            model: model.into(),
            task: task.into(),
            id: id.into(),
            input: input.into(),
            reference: reference.into(),
            output,
            latency_sec,
            output_tokens,
        }
    }

    pub fn with_output_tokens(mut self, output_tokens: u64) -> Self {
        self.output_tokens = output_tokens;
        self
    }

    /// Parse one JSONL line. Unknown keys are ignored; a missing or
    /// mistyped required key is a schema error.
    pub fn from_json_line(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| CoreError::Schema(e.to_string()))
    }

    pub fn task_kind(&self) -> Result<TaskKind> {
        self.task.parse()
    }

    /// Field-level validation plus task recognition.
    pub fn check_schema(&self) -> Result<TaskKind> {
        self.validate()
            .map_err(|e| CoreError::Schema(format!("record '{}': {}", self.id, e)))?;
        self.task_kind()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}
